use crate::{directory::StylistDirectory, types::Stylist};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

const EXAMPLE_STYLISTS: [&str; 3] = ["Alex", "Robin", "Sam"];

#[derive(Debug, Clone, Default)]
pub struct LocalStylists {
    stylists: HashMap<Uuid, Stylist>,
}

impl LocalStylists {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut directory = Self::default();
        for name in names {
            directory.add_stylist(Stylist::from_name(name));
        }
        directory
    }

    pub fn insert_example_stylists(&mut self) {
        for name in EXAMPLE_STYLISTS {
            self.add_stylist(Stylist::from_name(name));
        }
    }

    pub fn add_stylist(&mut self, stylist: Stylist) {
        info!(id = %stylist.id, name = %stylist.name, "Registered stylist");
        self.stylists.insert(stylist.id, stylist);
    }

    pub fn is_empty(&self) -> bool {
        self.stylists.is_empty()
    }
}

impl StylistDirectory for LocalStylists {
    fn stylist(&self, id: Uuid) -> Option<Stylist> {
        self.stylists.get(&id).cloned()
    }

    fn stylists(&self) -> Vec<Stylist> {
        let mut stylists: Vec<Stylist> = self.stylists.values().cloned().collect();
        stylists.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        stylists
    }
}
