fn main() {
    #[cfg(feature = "hydrate")]
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(info_section::App);
}
