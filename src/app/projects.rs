use leptos::prelude::*;
use leptos_meta::Title;

#[derive(Debug, Clone, Copy)]
struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    image: Option<&'static str>,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Proyecto Final DAW",
        description: "Aplicación web de gestión de tareas colaborativa desarrollada como proyecto final del grado superior. Implementa autenticación de usuarios, tiempo real y diseño responsive.",
        tech: &["React", "Node.js", "MySQL"],
        image: Some("/images/proyecto-daw.jpg"),
    },
    Project {
        title: "Consultora Páginas Web",
        description: "Proyecto personal de una tienda sobre venta de páginas web.",
        tech: &["JavaScript", "PHP", "MySQL", "Bootstrap"],
        image: Some("/images/consultora.jpg"),
    },
    Project {
        title: "Portfolio Personal",
        description: "Sitio web personal desarrollado con Rust y Leptos, implementando las mejores prácticas de diseño responsive y optimización de rendimiento.",
        tech: &["Rust", "Leptos", "Tailwind"],
        image: Some("/images/portfolio.jpg"),
    },
    Project {
        title: "Página Web de Vinos",
        description: "Página web sobre venta e inscripción de cursos de vinos con menú de administración y vista de estadísticas.",
        tech: &["PHP", "Laravel", "MySQL", "TailwindCSS"],
        image: Some("/images/vinos.png"),
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <Title text="Proyectos" />
        <section class="relative px-8 py-24 glow-blob glow-bottom">
            <h2 class="gradient-title text-5xl font-extrabold text-center mb-4 fade-in-up">
                "Mis Proyectos"
            </h2>
            <div class="grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-8 mt-12">
                {PROJECTS
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project index=i /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    // hide the screenshot instead of showing a broken image
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <div
            class="card rounded-2xl overflow-hidden shadow-md hover:-translate-y-2.5 transition-transform duration-200 fade-in-up"
            style=format!("animation-delay: {}ms", 200 * (index + 1))
        >
            {project
                .image
                .map(|src| {
                    view! {
                        <Show when=move || !image_failed()>
                            <img
                                class="w-full h-[200px] object-cover border-b border-white/10"
                                src=src
                                alt=project.title
                                on:error=move |_| set_image_failed(true)
                            />
                        </Show>
                    }
                })}
            <div class="p-8">
                <h3 class="text-heading text-2xl font-semibold mb-4">{project.title}</h3>
                <p class="mb-6 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-3">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
