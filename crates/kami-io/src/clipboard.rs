use arboard::Clipboard;

/// Put one result on the system clipboard. Blocking; call from
/// `spawn_blocking` in async contexts.
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
