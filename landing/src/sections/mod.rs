// OllaBridge site sections
// Home page blocks, docs page blocks, and the chrome shared by both.

mod architecture;
mod best_practices;
mod call_to_action;
mod code_samples;
mod code_window;
mod commands;
mod docker;
mod features;
mod footer;
mod hero;
mod nav;
mod nodes;
mod quickstart;
mod scenarios;
mod sdk;
mod section_title;
mod troubleshooting;

pub use architecture::Architecture;
pub use best_practices::BestPractices;
pub use call_to_action::CallToAction;
pub use code_samples::CodeSamples;
pub use code_window::CodeWindow;
pub use commands::Commands;
pub use docker::Docker;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use nodes::Nodes;
pub use quickstart::Quickstart;
pub use scenarios::Scenarios;
pub use sdk::Sdk;
pub use section_title::{Callout, CheckList, Pill, SectionTitle};
pub use troubleshooting::Troubleshooting;
