//! Find a single resource by id, or failing that by its unique name
//!
//! OpenStack services key resources by id, but operators name them. A check
//! given a name first tries it as an id, then lists everything and keeps the
//! exact name matches.

use tracing::debug;

use crate::ClientError;

/// Something with an optional human readable name
pub trait Named {
    fn name(&self) -> Option<&str>;
}

/// The outcome of [`find_by_id_or_name`]
#[derive(Debug, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    /// This many resources share the name
    Ambiguous(usize),
}

/// Look `key` up with `get`, falling back to filtering `list` by name
///
/// Only a not-found from `get` triggers the fallback, any other error is
/// returned as is.
pub fn find_by_id_or_name<T, G, L>(key: &str, get: G, list: L) -> Result<Lookup<T>, ClientError>
where
    T: Named,
    G: FnOnce(&str) -> Result<T, ClientError>,
    L: FnOnce() -> Result<Vec<T>, ClientError>,
{
    match get(key) {
        Ok(found) => return Ok(Lookup::Found(found)),
        Err(ClientError::NotFound(what)) => {
            debug!("{} not found by id, searching by name", what);
        }
        Err(e) => return Err(e),
    }

    let mut matches: Vec<T> = list()?
        .into_iter()
        .filter(|item| item.name() == Some(key))
        .collect();
    Ok(match matches.len() {
        0 => Lookup::Missing,
        1 => Lookup::Found(matches.remove(0)),
        n => Lookup::Ambiguous(n),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Thing {
        id: &'static str,
        name: Option<&'static str>,
    }

    impl Named for Thing {
        fn name(&self) -> Option<&str> {
            self.name
        }
    }

    fn thing(id: &'static str, name: &'static str) -> Thing {
        Thing {
            id,
            name: Some(name),
        }
    }

    fn not_found(key: &str) -> Result<Thing, ClientError> {
        Err(ClientError::NotFound(format!("thing {}", key)))
    }

    #[test]
    fn direct_hit_skips_listing() {
        let result = find_by_id_or_name(
            "abc",
            |_| Ok(thing("abc", "X")),
            || panic!("should not list"),
        );
        assert_eq!(result, Ok(Lookup::Found(thing("abc", "X"))));
    }

    #[test]
    fn falls_back_to_unique_name() {
        let result = find_by_id_or_name("X", not_found, || {
            Ok(vec![thing("1", "Y"), thing("2", "X"), thing("3", "XX")])
        });
        assert_eq!(result, Ok(Lookup::Found(thing("2", "X"))));
    }

    #[test]
    fn duplicate_names_are_ambiguous() {
        let result = find_by_id_or_name("X", not_found, || {
            Ok(vec![thing("1", "X"), thing("2", "Y"), thing("3", "X")])
        });
        assert_eq!(result, Ok(Lookup::Ambiguous(2)));
    }

    #[test]
    fn no_name_match_is_missing() {
        let result = find_by_id_or_name("X", not_found, || {
            Ok(vec![
                thing("1", "x"),
                Thing {
                    id: "2",
                    name: None,
                },
            ])
        });
        assert_eq!(result, Ok(Lookup::Missing));
    }

    #[test]
    fn other_errors_do_not_fall_back() {
        let result = find_by_id_or_name(
            "X",
            |_| -> Result<Thing, ClientError> { Err(ClientError::Transport("refused".into())) },
            || panic!("should not list"),
        );
        assert_eq!(result, Err(ClientError::Transport("refused".into())));
    }

    #[test]
    fn listing_errors_are_returned() {
        let result = find_by_id_or_name("X", not_found, || {
            Err(ClientError::Api {
                status: 500,
                body: "boom".into(),
            })
        });
        assert_eq!(
            result,
            Err(ClientError::Api {
                status: 500,
                body: "boom".into()
            })
        );
    }
}
