use serde::{Deserialize, Serialize};

/// The nine slot names, in canonical order.
pub const SLOT_NAMES: [&str; 9] = [
    "SME",
    "PM",
    "Research & LO",
    "Coursewriting",
    "Scripts",
    "Graphic Design",
    "Studio Hire",
    "Talent",
    "Animation",
];

/// Named unit-count inputs driving the breakdown engine.
///
/// Fixed closed set; every slot defaults to 1 when unspecified. The serde
/// spellings match the slot names exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSlots {
    /// Number of courses (SME).
    #[serde(rename = "SME")]
    pub sme: u64,
    /// Number of courses (PM).
    #[serde(rename = "PM")]
    pub pm: u64,
    /// Number of courses (Research & LO).
    #[serde(rename = "Research & LO")]
    pub research_lo: u64,
    /// Number of courses (Coursewriting).
    #[serde(rename = "Coursewriting")]
    pub coursewriting: u64,
    /// Number of courses (Scriptwriting).
    #[serde(rename = "Scripts")]
    pub scripts: u64,
    /// Number of courses (Graphic Design).
    #[serde(rename = "Graphic Design")]
    pub graphic_design: u64,
    /// Number of filming days.
    #[serde(rename = "Studio Hire")]
    pub studio_hire: u64,
    /// Talent days per person, total.
    #[serde(rename = "Talent")]
    pub talent: u64,
    /// Seconds of animation.
    #[serde(rename = "Animation")]
    pub animation: u64,
}

impl Default for UnitSlots {
    fn default() -> Self {
        Self {
            sme: 1,
            pm: 1,
            research_lo: 1,
            coursewriting: 1,
            scripts: 1,
            graphic_design: 1,
            studio_hire: 1,
            talent: 1,
            animation: 1,
        }
    }
}

impl UnitSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a slot by its canonical name.
    pub fn get(&self, name: &str) -> Option<u64> {
        match name {
            "SME" => Some(self.sme),
            "PM" => Some(self.pm),
            "Research & LO" => Some(self.research_lo),
            "Coursewriting" => Some(self.coursewriting),
            "Scripts" => Some(self.scripts),
            "Graphic Design" => Some(self.graphic_design),
            "Studio Hire" => Some(self.studio_hire),
            "Talent" => Some(self.talent),
            "Animation" => Some(self.animation),
            _ => None,
        }
    }

    /// Units for a Course Creation resource: any resource whose name is one
    /// of the slot names resolves to that slot's count, anything else is
    /// not covered by the breakdown.
    pub fn course_creation_units(&self, resource: &str) -> Option<u64> {
        self.get(resource)
    }

    pub fn with_slot(mut self, name: &str, count: u64) -> Self {
        self.set(name, count);
        self
    }

    /// Set a slot by canonical name. Unknown names are ignored and reported
    /// back as `false`.
    pub fn set(&mut self, name: &str, count: u64) -> bool {
        let slot = match name {
            "SME" => &mut self.sme,
            "PM" => &mut self.pm,
            "Research & LO" => &mut self.research_lo,
            "Coursewriting" => &mut self.coursewriting,
            "Scripts" => &mut self.scripts,
            "Graphic Design" => &mut self.graphic_design,
            "Studio Hire" => &mut self.studio_hire,
            "Talent" => &mut self.talent,
            "Animation" => &mut self.animation,
            _ => return false,
        };
        *slot = count;
        true
    }
}
