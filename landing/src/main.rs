// OllaBridge site - Leptos 0.8 Edition

fn main() {
    ollabridge_landing::run();
}
