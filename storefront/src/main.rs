//! Browser entry point: mount the app onto `<body>`.

use velo_storefront::app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
