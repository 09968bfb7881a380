/// Directory-safe form of a search term: transliterated to ASCII, lowercased,
/// with every run of other characters (quotes included) collapsed into a
/// single `-`. "C'est déjà l'été." becomes "c-est-deja-l-ete".
pub fn slugify(text: &str) -> String {
    ::slug::slugify(text)
}
