//! Typed indices into the model arenas

use serde::Serialize;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

entity_id!(
    /// Index of a [`Domain`](super::Domain) in [`Cml::domains`](super::Cml::domains)
    DomainId
);
entity_id!(
    /// Index of a [`Subdomain`](super::Subdomain) in [`Cml::subdomains`](super::Cml::subdomains)
    SubdomainId
);
entity_id!(
    /// Index of a [`Context`](super::Context) in [`Cml::contexts`](super::Cml::contexts)
    ContextId
);
entity_id!(
    /// Index of a [`ContextMap`](super::ContextMap) in [`Cml::context_maps`](super::Cml::context_maps)
    ContextMapId
);
entity_id!(
    /// Index of a [`UseCase`](super::UseCase) in [`Cml::use_cases`](super::Cml::use_cases)
    UseCaseId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_serialization() {
        assert_eq!(ContextId(3).to_string(), "ContextId#3");
        assert_eq!(serde_json::to_string(&SubdomainId(7)).unwrap(), "7");
        assert_eq!(DomainId(2).index(), 2);
    }
}
