mod about;
mod contact;
mod hero;
mod navbar;
mod projects;
mod welcome;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutMe;
use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use welcome::Welcome;

pub const OWNER_NAME: &str = "Juan Carlos Gallego Tévar";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content="Portfolio de Juan Carlos Gallego Tévar, desarrollador front-end" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-secondary">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (show_welcome, set_show_welcome) = signal(true);

    view! {
        <Title formatter=|title| format!("{title} | Juan Carlos Gallego") />

        <Router>
            <Show when=move || show_welcome()>
                <Welcome on_start=move |_| set_show_welcome(false) />
            </Show>
            // generate_route_list walks this tree; Routes must not sit behind the welcome gate.
            <div class="min-h-screen flex flex-col" class:hidden=move || show_welcome()>
                <Navbar />
                <main class="flex-grow w-full max-w-[1200px] mx-auto pt-20">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=Hero />
                        <Route path=path!("/sobre-mi") view=AboutMe />
                        <Route path=path!("/proyectos") view=Projects />
                        <Route path=path!("/contacto") view=Contact />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="404" />
        <section class="min-h-[70vh] flex flex-col justify-center items-center gap-6 px-8 fade-in-up">
            <h1 class="gradient-title text-5xl font-extrabold">"Página no encontrada"</h1>
            <A href="/" attr:class="text-accent hover:text-primary-light transition-colors">
                "Volver al inicio"
            </A>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="border-t border-white/10 py-6 px-8 text-sm text-center text-secondary/70">
            {format!("© {OWNER_NAME}")}
            {(!built.is_empty()).then(|| format!(" · actualizado {built}"))}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_route_list_includes_pages() {
        let routes = leptos_axum::generate_route_list(App);
        let paths: Vec<&str> = routes.iter().map(|r| r.path()).collect();
        for page in ["/", "/sobre-mi", "/proyectos", "/contacto"] {
            assert!(paths.contains(&page), "{page} missing from {paths:?}");
        }
    }
}
