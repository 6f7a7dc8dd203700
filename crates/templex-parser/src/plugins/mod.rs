//! Built-in locator strategies, one per authoring format.

pub mod angular;
pub mod html;
pub mod jsx;
pub mod lit;
pub mod svelte;
pub mod vue;

pub use angular::Angular;
pub use html::Html;
pub use jsx::Jsx;
pub use lit::Lit;
pub use svelte::Svelte;
pub use vue::Vue;
