//! Sales agent roster and random recipient selection.

use rand::Rng;

use crate::domain::{Recipient, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Phone numbers of the sales agents eligible to receive a lead.
///
/// Invariant: at least one entry. Order is the configured order.
pub struct AgentRoster(Vec<Recipient>);

#[allow(clippy::len_without_is_empty)]
impl AgentRoster {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "sales_agent_numbers";

    pub fn new(agents: Vec<Recipient>) -> Result<Self, ValidationError> {
        if agents.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(agents))
    }

    /// Parse a comma-separated list such as `"+31611111111, +31622222222"`.
    ///
    /// Entries are trimmed; empty entries are skipped.
    pub fn parse(list: &str) -> Result<Self, ValidationError> {
        let agents = list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(Recipient::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(agents)
    }

    pub fn agents(&self) -> &[Recipient] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Pick one agent uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Recipient {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}
