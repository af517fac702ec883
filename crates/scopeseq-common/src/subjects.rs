//! Subject registry.
//!
//! The catalog file only carries curriculum content; display names and emoji
//! come from this fixed list, which also fixes the order subjects are shown in.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const SUBJECTS: &[SubjectMeta] = &[
    SubjectMeta { id: "capa",        name: "CAPA",                 emoji: "🎨" },
    SubjectMeta { id: "computing",   name: "Computing Technology", emoji: "💻" },
    SubjectMeta { id: "design-tech", name: "Design & Technology",  emoji: "🛠️" },
    SubjectMeta { id: "dance",       name: "Dance",                emoji: "💃" },
    SubjectMeta { id: "drama",       name: "Drama",                emoji: "🎭" },
    SubjectMeta { id: "english",     name: "English",              emoji: "📘" },
    SubjectMeta { id: "hsie",        name: "HSIE",                 emoji: "🌍" },
    SubjectMeta { id: "lote",        name: "LOTE",                 emoji: "💬" },
    SubjectMeta { id: "maths",       name: "Maths",                emoji: "➗" },
    SubjectMeta { id: "music",       name: "Music",                emoji: "🎼" },
    SubjectMeta { id: "pdhpe",       name: "PDHPE",                emoji: "🏃" },
    SubjectMeta { id: "science",     name: "Science",              emoji: "🔬" },
    SubjectMeta { id: "tas",         name: "TAS",                  emoji: "⚙️" },
    SubjectMeta { id: "visual-arts", name: "Visual Arts",          emoji: "🖌️" },
];

pub fn find_subject(id: &str) -> Option<&'static SubjectMeta> {
    SUBJECTS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_unique() {
        let mut ids: Vec<&str> = SUBJECTS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SUBJECTS.len());
    }

    #[test]
    fn test_find_subject() {
        assert_eq!(find_subject("maths").map(|s| s.name), Some("Maths"));
        assert!(find_subject("astrology").is_none());
    }
}
