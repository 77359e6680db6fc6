use axum::http::StatusCode;
use axum_test::TestServer;
use lingo::{build_server_with_catalog, model::Catalog};
use serde_json::Value;
use tower_cookies::Cookie;

pub fn setup_server() -> TestServer {
    let catalog = Catalog::seed().unwrap();
    let server = build_server_with_catalog(catalog, false).1;
    TestServer::new(server).unwrap()
}

pub struct Action {
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub expect: StatusCode,
    pub clear_cookies: bool,
    pub query_params: Vec<(String, String)>,
    pub cookie_asserts: Vec<(&'static str, Box<dyn Fn(&Cookie) + Send + Sync>)>,
    pub body_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
}

impl Action {
    pub fn new(name: &'static str, method: &'static str, path: &str) -> Self {
        Self {
            name,
            method,
            path: path.to_string(),
            expect: StatusCode::OK,
            clear_cookies: false,
            query_params: vec![],
            cookie_asserts: vec![],
            body_asserts: vec![],
        }
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    pub fn with_clear_cookies(mut self, clear_cookies: bool) -> Self {
        self.clear_cookies = clear_cookies;
        self
    }

    pub fn with_param(mut self, key: &str, val: &str) -> Self {
        self.query_params
            .push((String::from(key), String::from(val)));
        self
    }

    pub fn assert_cookie<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&Cookie) + Send + Sync + 'static,
    {
        self.cookie_asserts.push((name, Box::new(check)));
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Runs every step against the same server; the session cookie carries over between steps.
    pub async fn run(self, server: &mut TestServer) {
        server.save_cookies();

        for action in self.actions {
            println!("==> Running test action `{}`", action.name);
            if action.clear_cookies {
                server.clear_cookies();
            }

            let mut req = match action.method {
                "GET" => server.get(&action.path),
                "POST" => server.post(&action.path),
                "DELETE" => server.delete(&action.path),
                _ => panic!("unsupported method {}", action.method),
            };

            for (k, v) in action.query_params {
                req = req.add_query_param(&k, v);
            }

            let resp = req.await;
            resp.assert_status(action.expect);

            for (cookie_name, check) in action.cookie_asserts {
                let cookie = resp
                    .maybe_cookie(cookie_name)
                    .unwrap_or_else(|| panic!("Cookie {} is not set", cookie_name));
                check(&cookie);
            }

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                for check in &action.body_asserts {
                    check(&body);
                }
            }
        }
    }
}

// Common actions builders

pub fn catalog_action() -> Action {
    Action::new("catalog", "GET", "/api/v1/courses")
}

pub fn course_action(id: &str) -> Action {
    Action::new("course", "GET", &format!("/api/v1/courses/{id}"))
}

pub fn enroll_action(id: &str) -> Action {
    Action::new("enroll", "POST", &format!("/api/v1/courses/{id}/enroll"))
}

pub fn unenroll_action(id: &str) -> Action {
    Action::new("unenroll", "DELETE", &format!("/api/v1/courses/{id}/enroll"))
}

pub fn dashboard_action() -> Action {
    Action::new("dashboard", "GET", "/api/v1/dashboard")
}

/// Course ids of a list of course summaries found at `pointer`.
pub fn ids_at(body: &Value, pointer: &str) -> Vec<String> {
    body.pointer(pointer)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("no array at {pointer}"))
        .iter()
        .map(|c| {
            c.get("id")
                .or_else(|| c.pointer("/course/id"))
                .and_then(Value::as_str)
                .expect("course without id")
                .to_string()
        })
        .collect()
}
