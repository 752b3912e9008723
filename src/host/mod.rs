//! Side effects the page composer asks of its environment. In the browser
//! these touch the DOM and `localStorage`; headless rendering turns them into
//! no-ops so the composer can be rendered to a string.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod headless;

#[cfg(target_arch = "wasm32")]
pub use browser::*;
#[cfg(not(target_arch = "wasm32"))]
pub use headless::*;
