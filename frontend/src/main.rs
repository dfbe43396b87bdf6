//! Entry point for the WASM application

pub fn main() {
    resume_extractor_ui::start();
}
