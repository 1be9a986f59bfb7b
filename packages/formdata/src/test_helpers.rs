use std::collections::HashMap;

use crate::file::FileHandle;
use crate::form::FormData;

pub const EMAILS: [&str; 4] = [
    "example@gmail.com",
    "elon@tesla.com",
    "richard@feynman.com",
    "charlie@berkshirehathaway.com",
];

pub const GAMES: [&str; 3] = [
    "wario_land_super_mario_land_3.gameboy",
    "sonic_2.sega",
    "tekken_3.ps",
];

pub const DOCUMENTS: [&str; 4] = ["invoice.pdf", "passport.pdf", "readme.md", "recipe.docx"];

pub const PHOTOS: [&str; 3] = ["CFA00833.ARW", "CFA00833.JPG", "CFA00833.jpg"];

fn handles(names: &[&str]) -> Vec<FileHandle> {
    names
        .iter()
        .map(|name| FileHandle::in_memory(*name, None, Vec::new()))
        .collect()
}

pub fn sample_documents() -> Vec<FileHandle> {
    handles(&DOCUMENTS)
}

pub fn sample_photos() -> Vec<FileHandle> {
    handles(&PHOTOS)
}

pub fn populated_form_data() -> FormData {
    let mut values = HashMap::new();
    values.insert("emails".to_string(), EMAILS.iter().map(|s| s.to_string()).collect());
    values.insert("games".to_string(), GAMES.iter().map(|s| s.to_string()).collect());

    let mut files = HashMap::new();
    files.insert("documents".to_string(), sample_documents());
    files.insert("photos".to_string(), sample_photos());

    FormData::new(values, files)
}
