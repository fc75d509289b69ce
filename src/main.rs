#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos::logging::{error, log};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use fryfinder::app::*;

    // Load configuration from [package.metadata.leptos] and LEPTOS_* overrides
    let conf = get_configuration(None).await.map_err(|e| {
        error!("[SERVER] Failed to load configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] {} listening on http://{}", PAGE_TITLE, &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            // Each request renders a freshly seeded session
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use fryfinder::app::*;

    fryfinder::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
