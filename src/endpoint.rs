use std::fmt;

/// Top-level resource family of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    User,
    Faction,
    Market,
    Racing,
    Forum,
    Torn,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::User,
        Category::Faction,
        Category::Market,
        Category::Racing,
        Category::Forum,
        Category::Torn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Faction => "faction",
            Self::Market => "market",
            Self::Racing => "racing",
            Self::Forum => "forum",
            Self::Torn => "torn",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an endpoint treats the identifier segment of its route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identifier {
    /// `/{category}/{resource}` only.
    None,
    /// `/{category}/{id}/{resource}` when an id is given, otherwise
    /// `/{category}/{resource}`.
    Optional,
    /// Always `/{category}/{id}/{resource}`.
    Required,
}

/// One logical API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub category: Category,
    /// Sub-resource after the identifier; empty for the bare category route.
    pub resource: &'static str,
    pub identifier: Identifier,
    pub selections: bool,
    pub summary: &'static str,
}

impl Endpoint {
    /// Resolves the route path for this endpoint.
    ///
    /// Only optional identifiers fall back to the non-identifier route when
    /// missing or empty. A required segment is always embedded, even empty,
    /// so the server rejects the call instead of answering another route.
    pub fn path(&self, id: Option<&str>) -> String {
        let mut path = format!("/{}", self.category);

        match self.identifier {
            Identifier::None => {}
            Identifier::Optional => {
                if let Some(id) = id.filter(|id| !id.is_empty()) {
                    path.push('/');
                    path.push_str(id);
                }
            }
            Identifier::Required => {
                path.push('/');
                path.push_str(id.unwrap_or_default());
            }
        }

        if !self.resource.is_empty() {
            path.push('/');
            path.push_str(self.resource);
        }

        path
    }

    /// Route template as shown to humans, e.g. `/faction/{id}/members`.
    pub fn template(&self) -> String {
        match self.identifier {
            Identifier::None => self.path(None),
            Identifier::Optional => {
                let path = self.path(Some("{id}"));
                path.replacen("/{id}", "[/{id}]", 1)
            }
            Identifier::Required => self.path(Some("{id}")),
        }
    }
}

/// Renders an optional numeric identifier; zero counts as absent.
pub(crate) fn optional_segment(id: Option<u64>) -> Option<String> {
    id.filter(|id| *id != 0).map(|id| id.to_string())
}

/// Renders a list of identifiers as one comma-separated segment.
pub(crate) fn list_segment(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: Endpoint = Endpoint {
        name: "faction_members",
        category: Category::Faction,
        resource: "members",
        identifier: Identifier::Optional,
        selections: true,
        summary: "",
    };

    const TIMESTAMP: Endpoint = Endpoint {
        name: "user_timestamp",
        category: Category::User,
        resource: "timestamp",
        identifier: Identifier::None,
        selections: false,
        summary: "",
    };

    const ANY_USER: Endpoint = Endpoint {
        name: "user",
        category: Category::User,
        resource: "",
        identifier: Identifier::None,
        selections: true,
        summary: "",
    };

    #[test]
    fn optional_identifier_changes_route_shape() {
        assert_eq!(MEMBERS.path(None), "/faction/members");
        assert_eq!(MEMBERS.path(Some("12345")), "/faction/12345/members");
        assert_eq!(MEMBERS.path(Some("")), "/faction/members");
    }

    #[test]
    fn identifier_ignored_when_route_takes_none() {
        assert_eq!(TIMESTAMP.path(Some("7")), "/user/timestamp");
    }

    #[test]
    fn required_identifier_is_always_embedded() {
        const RACE: Endpoint = Endpoint {
            name: "racing_race",
            category: Category::Racing,
            resource: "race",
            identifier: Identifier::Required,
            selections: true,
            summary: "",
        };
        assert_eq!(RACE.path(Some("42")), "/racing/42/race");
        assert_eq!(RACE.path(None), "/racing//race");
        assert_eq!(RACE.path(Some("")), "/racing//race");
    }

    #[test]
    fn bare_category_route() {
        assert_eq!(ANY_USER.path(None), "/user");
    }

    #[test]
    fn templates() {
        assert_eq!(MEMBERS.template(), "/faction[/{id}]/members");
        assert_eq!(TIMESTAMP.template(), "/user/timestamp");
    }

    #[test]
    fn zero_identifier_is_absent() {
        assert_eq!(optional_segment(Some(0)), None);
        assert_eq!(optional_segment(None), None);
        assert_eq!(optional_segment(Some(99)), Some("99".to_string()));
    }

    #[test]
    fn list_identifiers_are_comma_joined() {
        assert_eq!(list_segment(&[1, 2, 3]), "1,2,3");
        assert_eq!(list_segment(&[]), "");
    }

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("company"), None);
    }
}
