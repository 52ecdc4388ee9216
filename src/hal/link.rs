//! Transport link status.

/// Reports whether the communication transport (e.g. USB CDC) is
/// connected and configured, i.e. ready to carry a console session.
pub trait Link {
    fn is_active(&self) -> bool;
}
