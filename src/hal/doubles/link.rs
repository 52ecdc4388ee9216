use crate::hal::link::Link;

#[derive(Copy, Clone, Debug, Default)]
pub struct FakeLink {
    pub active: bool,
}

impl Link for FakeLink {
    fn is_active(&self) -> bool { self.active }
}
