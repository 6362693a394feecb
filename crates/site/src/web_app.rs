use drive_host_web::{build_host_services, load_drive_config};
use drive_runtime::{DriveProvider, DriveShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Drive Explorer" />
        <Meta name="description" content="Browse, preview and manage files across linked drive accounts." />

        <main class="site-root">
            <DriveEntry />
        </main>
    }
}

#[component]
pub fn DriveEntry() -> impl IntoView {
    let host_services = build_host_services(load_drive_config());

    view! {
        <DriveProvider host_services=host_services>
            <DriveShell />
        </DriveProvider>
    }
}
