//! Handler options that expose RPC methods over HTTP
//!
//! ```
//! use waypoint_api::{get, HttpHandlers};
//! use waypoint_server::HandlerOptions;
//!
//! let mut routes = HttpHandlers::new();
//! routes.post("/greeter/", "Greeter.Hello").get("/greeter/", "Greeter.Hello");
//!
//! let options = HandlerOptions::with_options(&routes);
//! assert!(options.metadata("Greeter.Hello").is_some());
//!
//! let single = get("/bye", "Greeter.Bye");
//! assert_eq!(single.endpoint(), "Greeter.Bye");
//! ```

use crate::endpoint::Endpoint;
use http::Method;
use waypoint_server::{endpoint_metadata, HandlerOption};

/// Handler type for endpoints served by forwarding to an RPC method
pub const RPC_HANDLER: &str = "rpc";

/// Create a handler option carrying endpoint metadata
pub fn with_endpoint(endpoint: &Endpoint) -> HandlerOption {
    endpoint_metadata(endpoint.name.clone(), endpoint.encode())
}

fn route(method: Method, path: &str, name: &str) -> HandlerOption {
    with_endpoint(&Endpoint {
        name: name.to_string(),
        path: vec![path.to_string()],
        method: vec![method.as_str().to_string()],
        handler: RPC_HANDLER.to_string(),
        ..Endpoint::default()
    })
}

/// Serve `name` for GET requests matching `path`
pub fn get(path: &str, name: &str) -> HandlerOption {
    route(Method::GET, path, name)
}

/// Serve `name` for POST requests matching `path`
pub fn post(path: &str, name: &str) -> HandlerOption {
    route(Method::POST, path, name)
}

/// Serve `name` for PUT requests matching `path`
pub fn put(path: &str, name: &str) -> HandlerOption {
    route(Method::PUT, path, name)
}

/// Serve `name` for PATCH requests matching `path`
pub fn patch(path: &str, name: &str) -> HandlerOption {
    route(Method::PATCH, path, name)
}

/// Serve `name` for DELETE requests matching `path`
pub fn delete(path: &str, name: &str) -> HandlerOption {
    route(Method::DELETE, path, name)
}

/// Ordered list of HTTP handler options, appended one verb at a time
#[derive(Debug, Clone, Default)]
pub struct HttpHandlers {
    options: Vec<HandlerOption>,
}

impl HttpHandlers {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built option
    pub fn push(&mut self, option: HandlerOption) -> &mut Self {
        self.options.push(option);
        self
    }

    /// Append a GET route serving `name`
    pub fn get(&mut self, path: &str, name: &str) -> &mut Self {
        self.push(get(path, name))
    }

    /// Append a POST route serving `name`
    pub fn post(&mut self, path: &str, name: &str) -> &mut Self {
        self.push(post(path, name))
    }

    /// Append a PUT route serving `name`
    pub fn put(&mut self, path: &str, name: &str) -> &mut Self {
        self.push(put(path, name))
    }

    /// Append a PATCH route serving `name`
    pub fn patch(&mut self, path: &str, name: &str) -> &mut Self {
        self.push(patch(path, name))
    }

    /// Append a DELETE route serving `name`
    pub fn delete(&mut self, path: &str, name: &str) -> &mut Self {
        self.push(delete(path, name))
    }

    /// Number of options appended so far
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no option has been appended
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate options in append order
    pub fn iter(&self) -> std::slice::Iter<'_, HandlerOption> {
        self.options.iter()
    }

    /// Options in append order
    pub fn as_slice(&self) -> &[HandlerOption] {
        &self.options
    }

    /// Take the options for handler registration
    pub fn into_options(self) -> Vec<HandlerOption> {
        self.options
    }
}

impl IntoIterator for HttpHandlers {
    type Item = HandlerOption;
    type IntoIter = std::vec::IntoIter<HandlerOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}

impl<'a> IntoIterator for &'a HttpHandlers {
    type Item = &'a HandlerOption;
    type IntoIter = std::slice::Iter<'a, HandlerOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    fn decoded(option: &HandlerOption) -> Endpoint {
        decode(Some(option.metadata())).unwrap()
    }

    #[test]
    fn test_get_builder() {
        let option = get("/greeter/", "Greeter.Hello");
        assert_eq!(option.endpoint(), "Greeter.Hello");

        let endpoint = decoded(&option);
        assert_eq!(endpoint.name, "Greeter.Hello");
        assert_eq!(endpoint.method, vec!["GET"]);
        assert_eq!(endpoint.path, vec!["/greeter/"]);
        assert_eq!(endpoint.handler, RPC_HANDLER);
        assert!(endpoint.host.is_empty());
    }

    #[test]
    fn test_verb_builders() {
        let cases = [
            (post("/a", "A"), "POST"),
            (put("/a", "A"), "PUT"),
            (patch("/a", "A"), "PATCH"),
            (delete("/a", "A"), "DELETE"),
        ];

        for (option, verb) in cases {
            let endpoint = decoded(&option);
            assert_eq!(endpoint.method, vec![verb]);
            assert!(endpoint.validate().is_ok());
        }
    }

    #[test]
    fn test_with_endpoint_keys_by_name() {
        let endpoint = Endpoint {
            name: "Greeter.Hello".to_string(),
            host: vec!["example.com".to_string()],
            handler: "proxy".to_string(),
            ..Endpoint::default()
        };

        let option = with_endpoint(&endpoint);
        assert_eq!(option.endpoint(), "Greeter.Hello");
        assert_eq!(decoded(&option), endpoint);
    }

    #[test]
    fn test_http_handlers_append_in_order() {
        let mut routes = HttpHandlers::new();
        assert!(routes.is_empty());

        routes.post("/a", "A").get("/b", "B");

        assert_eq!(routes.len(), 2);
        let endpoints: Vec<Endpoint> = routes.iter().map(decoded).collect();
        assert_eq!(endpoints[0].name, "A");
        assert_eq!(endpoints[0].method, vec!["POST"]);
        assert_eq!(endpoints[1].name, "B");
        assert_eq!(endpoints[1].method, vec!["GET"]);
    }

    #[test]
    fn test_http_handlers_all_verbs() {
        let mut routes = HttpHandlers::new();
        routes
            .get("/r", "R.Get")
            .post("/r", "R.Post")
            .put("/r", "R.Put")
            .patch("/r", "R.Patch")
            .delete("/r", "R.Delete");

        let names: Vec<String> = routes.into_iter().map(|o| o.endpoint().to_string()).collect();
        assert_eq!(names, vec!["R.Get", "R.Post", "R.Put", "R.Patch", "R.Delete"]);
    }
}
