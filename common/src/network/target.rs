/// One hostname generated from the template, tagged with its index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostTarget {
    pub index: u32,
    pub hostname: String,
}

impl HostTarget {
    pub fn new(index: u32, hostname: impl Into<String>) -> Self {
        Self {
            index,
            hostname: hostname.into(),
        }
    }
}
