//! Filling the document skeletons of each output format

mod template;

pub use template::*;

/// Substitute each placeholder in the skeleton with its field, verbatim.
/// The skeleton is scanned once from left to right; substituted text is
/// never scanned again, so a body that happens to contain a placeholder
/// comes through untouched.
pub fn fill(skeleton: &str, fields: &Fields) -> String {
    let mut output = String::with_capacity(
        skeleton.len()
            + fields
                .styles
                .len()
            + fields
                .content
                .len()
            + 256,
    );
    let mut rest = skeleton;

    while let Some(i) = rest.find('{') {
        output.push_str(&rest[..i]);
        let candidate = &rest[i..];

        match fields.lookup(candidate) {
            Some((placeholder, value)) => {
                output.push_str(value);
                rest = &candidate[placeholder.len()..];
            }
            None => {
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }
    output.push_str(rest);

    output
}
