//! Authorization infrastructure

mod gate;

pub use gate::AuthorizationGate;
