/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that the orchestration layer
/// uses to resolve advisory counts for a software version.
pub mod advisory_lookup_port;

pub use advisory_lookup_port::AdvisoryLookupPort;
