// =============================================================================
// Admin Backend - Named HTTP Clients
// =============================================================================
// One `reqwest::Client` per name for the whole process. The first caller
// builds it; everyone after that gets the cached handle (clients share their
// connection pool on clone). There is no teardown.
// =============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use reqwest::Client;

static CLIENTS: LazyLock<RwLock<HashMap<String, Client>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Client registered as `name`, built with `init` if it does not exist yet.
pub fn get_or_init<F>(name: &str, init: F) -> Result<Client, reqwest::Error>
where
    F: FnOnce() -> Result<Client, reqwest::Error>,
{
    if let Some(client) = CLIENTS.read().get(name) {
        return Ok(client.clone());
    }

    let mut clients = CLIENTS.write();
    // Another caller may have won the race between the two locks.
    if let Some(client) = clients.get(name) {
        return Ok(client.clone());
    }

    let client = init()?;
    tracing::debug!("Registered HTTP client '{}'", name);
    clients.insert(name.to_string(), client.clone());
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_caller_reuses_first_instance() {
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            Client::builder().build()
        };

        get_or_init("registry-test", build).unwrap();
        get_or_init("registry-test", build).unwrap();

        assert_eq!(builds.get(), 1);
        assert!(CLIENTS.read().contains_key("registry-test"));
    }
}
