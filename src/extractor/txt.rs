/// Decode text bytes, replacing invalid UTF-8 sequences rather than failing.
/// The text is passed through otherwise untouched so chunk boundaries line up
/// with the source.
pub(crate) fn extract_txt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
