//! Per-process instance identifier attached to collector metrics.

use std::fmt;

use uuid::Uuid;

/// Resource attribute key carrying the instance identifier.
pub const INSTANCE_ID_KEY: &str = "service.instance.id";

/// Random identifier distinguishing this collector process from its replicas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_random_v4() {
        let id = InstanceId::generate();
        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert_eq!(id.to_string().len(), 36);
        assert_eq!(Uuid::parse_str(&id.to_string()).unwrap(), *id.as_uuid());
    }

    #[test]
    fn ids_differ() {
        assert_ne!(InstanceId::generate(), InstanceId::generate());
    }
}
