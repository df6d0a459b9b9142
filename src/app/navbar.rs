use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Inicio"),
    ("/sobre-mi", "Sobre Mí"),
    ("/proyectos", "Proyectos"),
    ("/contacto", "Contacto"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    let link_class = move |href: &'static str| {
        move || {
            if pathname.get() == href {
                "nav-link text-primary-light"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-[1000] flex justify-between items-center px-8 py-4 bg-[rgba(15,23,42,0.8)] backdrop-blur-md border-b border-white/10">
            <A href="/" attr:class="logo text-3xl font-extrabold">
                "JC"
            </A>
            <div class="hidden md:flex gap-10">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=href attr:class=link_class(href)>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                class="md:hidden text-primary text-2xl"
                aria-label="Abrir menú"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <Show when=move || menu_open.get()>
                <div class="md:hidden fixed top-[70px] inset-x-0 flex flex-col gap-6 p-6 bg-background-light border-b border-white/10 fade-in">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=link_class(href)
                                    on:click=move |_| set_menu_open(false)
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
