//! Resolving the stacks and servers a user names on the command line.

use crate::{
    types::{Server, Stack},
    StackCtlError,
};

/// Find the server `needle` refers to.
///
/// A server name (ignoring ASCII case), an IP address or a DNS record always
/// takes precedence over a role. A role must identify exactly one server.
pub fn find_server<'a>(
    servers: &'a [Server],
    needle: &str,
) -> Result<Option<&'a Server>, StackCtlError> {
    let by_identity = servers.iter().find(|server| {
        server.name.eq_ignore_ascii_case(needle)
            || server.address == needle
            || server.dns_record.as_deref() == Some(needle)
    });
    if by_identity.is_some() {
        return Ok(by_identity);
    }

    let by_role: Vec<&Server> = servers.iter().filter(|s| s.has_role(needle)).collect();
    match by_role.as_slice() {
        [] => Ok(None),
        [server] => Ok(Some(*server)),
        _ => Err(StackCtlError::AmbiguousServer {
            needle: needle.to_string(),
            names: by_role.iter().map(|s| s.name.clone()).collect(),
        }),
    }
}

/// Find the stack called `name` (ignoring ASCII case), optionally restricted
/// to one `environment`.
pub fn find_stack<'a>(
    stacks: &'a [Stack],
    name: &str,
    environment: Option<&str>,
) -> Result<Option<&'a Stack>, StackCtlError> {
    let matches: Vec<&Stack> = stacks
        .iter()
        .filter(|stack| stack.name.eq_ignore_ascii_case(name))
        .filter(|stack| match environment {
            Some(env) => stack.environment.eq_ignore_ascii_case(env),
            None => true,
        })
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [stack] => Ok(Some(*stack)),
        _ => Err(StackCtlError::AmbiguousStack {
            name: name.to_string(),
            environments: matches.iter().map(|s| s.environment.clone()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(name: &str, address: &str, roles: &[&str]) -> Server {
        Server {
            uid: format!("uid-{name}"),
            name: name.to_string(),
            address: address.to_string(),
            dns_record: Some(format!("{name}.mystack.example.com")),
            vendor_uid: None,
            server_type: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            stack_uid: None,
            region: None,
            size: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn stack(name: &str, environment: &str) -> Stack {
        Stack {
            uid: format!("{name}-{environment}"),
            name: name.to_string(),
            environment: environment.to_string(),
            cloud: None,
            fqdn: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn fleet() -> Vec<Server> {
        vec![
            server("lion", "10.0.0.1", &["web", "app"]),
            server("tiger", "10.0.0.2", &["web"]),
            server("bear", "10.0.0.3", &["db", "lion"]),
        ]
    }

    #[test]
    fn finds_server_by_name_ignoring_case() {
        let servers = fleet();
        let found = find_server(&servers, "TIGER").unwrap().unwrap();
        assert_eq!(found.name, "tiger");
    }

    #[test]
    fn finds_server_by_address_and_dns_record() {
        let servers = fleet();
        assert_eq!(find_server(&servers, "10.0.0.3").unwrap().unwrap().name, "bear");
        assert_eq!(
            find_server(&servers, "tiger.mystack.example.com")
                .unwrap()
                .unwrap()
                .name,
            "tiger"
        );
    }

    #[test]
    fn name_takes_precedence_over_role() {
        let servers = fleet();
        // "lion" is both a server name and a role of "bear".
        assert_eq!(find_server(&servers, "lion").unwrap().unwrap().name, "lion");
    }

    #[test]
    fn finds_server_by_unique_role() {
        let servers = fleet();
        assert_eq!(find_server(&servers, "db").unwrap().unwrap().name, "bear");
        assert_eq!(find_server(&servers, "App").unwrap().unwrap().name, "lion");
    }

    #[test]
    fn shared_role_is_ambiguous() {
        let servers = fleet();
        match find_server(&servers, "web") {
            Err(StackCtlError::AmbiguousServer { needle, names }) => {
                assert_eq!(needle, "web");
                assert_eq!(names, vec!["lion", "tiger"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_server_is_none() {
        let servers = fleet();
        assert!(find_server(&servers, "zebra").unwrap().is_none());
        assert!(find_server(&[], "lion").unwrap().is_none());
    }

    #[test]
    fn stack_lookup_uses_environment_to_disambiguate() {
        let stacks = vec![
            stack("mystack", "production"),
            stack("mystack", "staging"),
            stack("other", "production"),
        ];

        assert_eq!(
            find_stack(&stacks, "OTHER", None).unwrap().unwrap().uid,
            "other-production"
        );
        assert_eq!(
            find_stack(&stacks, "mystack", Some("staging"))
                .unwrap()
                .unwrap()
                .uid,
            "mystack-staging"
        );
        assert!(matches!(
            find_stack(&stacks, "mystack", None),
            Err(StackCtlError::AmbiguousStack { .. })
        ));
        assert!(find_stack(&stacks, "mystack", Some("qa"))
            .unwrap()
            .is_none());
    }
}
