//! Cross-reference resolution: expand one matched record into a page by
//! stitching in related records from the other two collections.
//!
//! The link is a data-level convention, not a schema rule: people and
//! tickets may carry `organization_id` pointing at an organisation's `_id`.
//! A missing link field or a dangling id is a valid state, never an error.

use crate::collection::RecordCollection;
use crate::error::{Error, Result};
use crate::matcher;
use crate::record::Record;

/// Identity field of organisation records.
pub const ID_FIELD: &str = "_id";
/// Link field carried by people and tickets.
pub const ORG_LINK_FIELD: &str = "organization_id";

/// Which collection a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Organisation,
    Ticket,
}

impl Role {
    /// Section label used for this role on a rendered page.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Organisation => "Organisation",
            Role::Ticket => "Ticket",
        }
    }
}

/// One section of a page: a single record, a run of records, or a bare
/// label/value row.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Single(Record),
    List(Vec<Record>),
    Text(String),
}

/// The assembled, multi-section result of one query match.
///
/// `display_order` declares which sections exist and the order to render
/// them; every label in it must be present in `sections`. Built fresh per
/// matched primary record and discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub sections: Vec<(String, Section)>,
    pub display_order: Vec<String>,
}

impl Page {
    pub fn new(sections: Vec<(String, Section)>, display_order: Vec<String>) -> Result<Self> {
        let page = Self { sections, display_order };
        page.validate()?;
        Ok(page)
    }

    /// Check the construction contract: some data to render, and a display
    /// order that only names sections that exist.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() && self.display_order.is_empty() {
            return Err(Error::MissingData);
        }
        for label in &self.display_order {
            if self.section(label).is_none() {
                return Err(Error::Layout);
            }
        }
        Ok(())
    }

    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|(name, _)| name == label).map(|(_, section)| section)
    }
}

/// The three collections a session works over.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: RecordCollection,
    pub organisations: RecordCollection,
    pub tickets: RecordCollection,
}

impl Dataset {
    pub fn collection(&self, role: Role) -> &RecordCollection {
        match role {
            Role::User => &self.users,
            Role::Organisation => &self.organisations,
            Role::Ticket => &self.tickets,
        }
    }

    /// Match `field`/`query` against the role's collection and expand every
    /// matched record into its own page, in match order.
    pub fn search(&self, role: Role, field: &str, query: &str) -> Result<Vec<Page>> {
        let primaries = matcher::search(self.collection(role), field, query)?;
        self.resolve_all(role, &primaries)
    }

    pub fn resolve_all(&self, role: Role, primaries: &[Record]) -> Result<Vec<Page>> {
        primaries.iter().map(|primary| self.resolve(role, primary)).collect()
    }

    /// Build the page for one primary record.
    ///
    /// The primary always leads under its role's label. Related sections are
    /// appended only when their lookups produce records; identity lookups go
    /// through the matcher's non-empty semantics.
    pub fn resolve(&self, role: Role, primary: &Record) -> Result<Page> {
        let mut sections = vec![(role.label().to_string(), Section::Single(primary.clone()))];
        let mut display_order = vec![role.label().to_string()];
        let mut append = |label: &str, section: Section| {
            sections.push((label.to_string(), section));
            display_order.push(label.to_string());
        };

        match role {
            Role::Organisation => {
                if let Some(org_id) = primary.get(ID_FIELD).map(ToString::to_string) {
                    if let Some(users) = related(&self.users, ORG_LINK_FIELD, &org_id) {
                        append("User", Section::List(users));
                    }
                    if let Some(tickets) = related(&self.tickets, ORG_LINK_FIELD, &org_id) {
                        append("Ticket", Section::List(tickets));
                    }
                }
            }
            Role::User | Role::Ticket => {
                if let Some(org_id) = primary.get(ORG_LINK_FIELD).map(ToString::to_string) {
                    if let Some(mut orgs) = related(&self.organisations, ID_FIELD, &org_id) {
                        append("Organisation", Section::Single(orgs.remove(0)));
                    }
                    if role == Role::User {
                        if let Some(tickets) = related(&self.tickets, ORG_LINK_FIELD, &org_id) {
                            append("Ticket", Section::List(tickets));
                        }
                    }
                }
            }
        }

        Page::new(sections, display_order)
    }
}

/// A related-record lookup that yields nothing is not an error at this
/// level; the section is simply omitted.
fn related(collection: &RecordCollection, field: &str, value: &str) -> Option<Vec<Record>> {
    match matcher::search(collection, field, value) {
        Ok(records) => Some(records),
        Err(Error::NoMatch { .. } | Error::UnknownField { .. }) => None,
        Err(_) => None,
    }
}
