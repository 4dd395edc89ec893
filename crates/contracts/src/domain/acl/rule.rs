//! ACL rule strings and their readable form.
//!
//! `<user> <RES+RES>/<resource-selector> <RIGHT+RIGHT> [<zone>]`, for example
//! `@1 VM+IMAGE/* CREATE #0`.

use std::fmt;

use crate::shared::error::AclParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclSelector {
    /// `#id`
    Individual(u64),
    /// `@id`
    Group(u64),
    /// `%id`
    Cluster(u64),
    /// `*`
    All,
}

impl AclSelector {
    pub fn parse(s: &str) -> Result<Self, AclParseError> {
        if s == "*" {
            return Ok(Self::All);
        }
        let mut chars = s.chars();
        let prefix = chars.next().ok_or_else(|| AclParseError::Selector(s.to_string()))?;
        let id: u64 = chars
            .as_str()
            .parse()
            .map_err(|_| AclParseError::Selector(s.to_string()))?;
        match prefix {
            '#' => Ok(Self::Individual(id)),
            '@' => Ok(Self::Group(id)),
            '%' => Ok(Self::Cluster(id)),
            _ => Err(AclParseError::Selector(s.to_string())),
        }
    }
}

impl fmt::Display for AclSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(id) => write!(f, "#{}", id),
            Self::Group(id) => write!(f, "@{}", id),
            Self::Cluster(id) => write!(f, "%{}", id),
            Self::All => f.write_str("*"),
        }
    }
}

macro_rules! rule_resources {
    ($($variant:ident => $token:literal, $plural:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum RuleResource {
            $($variant,)*
        }

        impl RuleResource {
            pub fn parse(token: &str) -> Result<Self, AclParseError> {
                match token {
                    $($token => Ok(Self::$variant),)*
                    other => Err(AclParseError::Resource(other.to_string())),
                }
            }

            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }

            pub const fn plural(self) -> &'static str {
                match self {
                    $(Self::$variant => $plural,)*
                }
            }
        }
    };
}

rule_resources! {
    Vm => "VM", "virtual machines";
    Host => "HOST", "hosts";
    Net => "NET", "virtual networks";
    Image => "IMAGE", "images";
    User => "USER", "users";
    Template => "TEMPLATE", "VM templates";
    Group => "GROUP", "groups";
    Datastore => "DATASTORE", "datastores";
    Cluster => "CLUSTER", "clusters";
    Document => "DOCUMENT", "documents";
    Zone => "ZONE", "zones";
    SecGroup => "SECGROUP", "security groups";
    Vdc => "VDC", "virtual data centers";
    VRouter => "VROUTER", "virtual routers";
    Marketplace => "MARKETPLACE", "marketplaces";
    MarketplaceApp => "MARKETPLACEAPP", "marketplace apps";
    VmGroup => "VMGROUP", "VM groups";
    VnTemplate => "VNTEMPLATE", "network templates";
    BackupJob => "BACKUPJOB", "backup jobs";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Right {
    Use,
    Manage,
    Admin,
    Create,
}

impl Right {
    pub fn parse(token: &str) -> Result<Self, AclParseError> {
        match token {
            "USE" => Ok(Self::Use),
            "MANAGE" => Ok(Self::Manage),
            "ADMIN" => Ok(Self::Admin),
            "CREATE" => Ok(Self::Create),
            other => Err(AclParseError::Right(other.to_string())),
        }
    }

    pub const fn verb(self) -> &'static str {
        match self {
            Self::Use => "use",
            Self::Manage => "manage",
            Self::Admin => "administrate",
            Self::Create => "create",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclRule {
    pub user: AclSelector,
    pub resources: Vec<RuleResource>,
    pub resource_selector: AclSelector,
    pub rights: Vec<Right>,
    pub zone: Option<AclSelector>,
}

impl AclRule {
    pub fn parse(rule: &str) -> Result<Self, AclParseError> {
        let sections: Vec<&str> = rule.split_whitespace().collect();
        match sections.len() {
            0 => return Err(AclParseError::Empty),
            3 | 4 => {}
            n => return Err(AclParseError::SectionCount(n)),
        }

        let user = AclSelector::parse(sections[0])?;
        if matches!(user, AclSelector::Cluster(_)) {
            return Err(AclParseError::Selector(sections[0].to_string()));
        }

        let (resources, selector) = sections[1]
            .split_once('/')
            .ok_or_else(|| AclParseError::MissingSeparator(sections[1].to_string()))?;
        let resources = resources
            .split('+')
            .map(RuleResource::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let resource_selector = AclSelector::parse(selector)?;

        let rights = sections[2]
            .split('+')
            .map(Right::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let zone = sections.get(3).map(|z| AclSelector::parse(z)).transpose()?;

        Ok(Self {
            user,
            resources,
            resource_selector,
            rights,
            zone,
        })
    }

    /// English sentence describing the rule.
    pub fn readable(&self) -> String {
        let who = match self.user {
            AclSelector::Individual(id) => format!("User #{}", id),
            AclSelector::Group(id) => format!("Members of group #{}", id),
            AclSelector::Cluster(id) => format!("Cluster #{}", id),
            AclSelector::All => "All users".to_string(),
        };
        let rights: Vec<&str> = self.rights.iter().map(|r| r.verb()).collect();
        let resources: Vec<&str> = self.resources.iter().map(|r| r.plural()).collect();
        let scope = match self.resource_selector {
            AclSelector::Individual(id) => format!(" with id #{}", id),
            AclSelector::Group(id) => format!(" owned by group #{}", id),
            AclSelector::Cluster(id) => format!(" in cluster #{}", id),
            AclSelector::All => String::new(),
        };
        let zone = match self.zone {
            Some(AclSelector::All) => " in all zones".to_string(),
            Some(selector) => format!(" in zone {}", selector),
            None => String::new(),
        };

        format!(
            "{} can {} {}{}{}",
            who,
            join_words(&rights),
            join_words(&resources),
            scope,
            zone
        )
    }
}

/// Readable sentence for a rule string, or the string itself if it does not
/// parse.
pub fn translate_acl(rule: &str) -> String {
    match AclRule::parse(rule) {
        Ok(parsed) => parsed.readable(),
        Err(e) => {
            log::debug!("acl '{}' shown verbatim: {}", rule, e);
            rule.to_string()
        }
    }
}

fn join_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [one] => (*one).to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_rule() {
        let rule = AclRule::parse("@1 VM+IMAGE/* CREATE #0").unwrap();
        assert_eq!(rule.user, AclSelector::Group(1));
        assert_eq!(rule.resources, vec![RuleResource::Vm, RuleResource::Image]);
        assert_eq!(rule.resource_selector, AclSelector::All);
        assert_eq!(rule.rights, vec![Right::Create]);
        assert_eq!(rule.zone, Some(AclSelector::Individual(0)));
    }

    #[test]
    fn test_translate() {
        assert_eq!(
            translate_acl("@1 VM+IMAGE/* CREATE #0"),
            "Members of group #1 can create virtual machines and images in zone #0"
        );
        assert_eq!(
            translate_acl("#5 HOST/%100 USE+MANAGE+ADMIN *"),
            "User #5 can use, manage and administrate hosts in cluster #100 in all zones"
        );
        assert_eq!(
            translate_acl("* NET/@3 USE"),
            "All users can use virtual networks owned by group #3"
        );
    }

    #[test]
    fn test_invalid_rules() {
        assert_eq!(AclRule::parse("  "), Err(AclParseError::Empty));
        assert_eq!(AclRule::parse("#1 VM/*"), Err(AclParseError::SectionCount(2)));
        assert_eq!(
            AclRule::parse("#1 VM* USE"),
            Err(AclParseError::MissingSeparator("VM*".to_string()))
        );
        assert_eq!(
            AclRule::parse("#1 DISK/* USE"),
            Err(AclParseError::Resource("DISK".to_string()))
        );
        assert_eq!(
            AclRule::parse("#1 VM/* DELETE"),
            Err(AclParseError::Right("DELETE".to_string()))
        );
        assert_eq!(
            AclRule::parse("%1 VM/* USE"),
            Err(AclParseError::Selector("%1".to_string()))
        );
    }

    #[test]
    fn test_unparsable_rule_is_shown_verbatim() {
        assert_eq!(translate_acl("garbage"), "garbage");
    }
}
