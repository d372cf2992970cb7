//! Burial chambers of the three Giza pyramids, measured in feet.

use crate::cavity::Cavity;

/// A named cavity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chamber {
    /// Short lowercase identifier used on the command line
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub cavity: Cavity,
}

pub const KHUFU: Chamber = Chamber {
    key: "khufu",
    name: "Khufu (King's Chamber)",
    cavity: Cavity::new(34.36, 17.19, 19.20),
};

pub const KHAFRE: Chamber = Chamber {
    key: "khafre",
    name: "Khafre",
    cavity: Cavity::new(46.5, 16.5, 22.5),
};

pub const MENKAURE: Chamber = Chamber {
    key: "menkaure",
    name: "Menkaure",
    cavity: Cavity::new(21.88, 8.67, 11.5),
};

pub const ALL: [Chamber; 3] = [KHUFU, KHAFRE, MENKAURE];

/// Looks up a chamber by key, ignoring ASCII case.
pub fn find(key: &str) -> Option<&'static Chamber> {
    ALL.iter().find(|chamber| chamber.key.eq_ignore_ascii_case(key))
}
