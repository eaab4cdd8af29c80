/// Physical finish of a printed card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finish {
    Normal,
    Foil,
}

impl Finish {
    /// ManaBox writes "normal" for non-foils; every other value (foil, etched) is a foil
    pub fn from_manabox(value: &str) -> Self {
        if value == "normal" {
            Finish::Normal
        } else {
            Finish::Foil
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Normal => "normal",
            Finish::Foil => "foil",
        }
    }
}
