use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <Title text="Inicio" />
        <section class="relative min-h-[90vh] flex flex-col justify-center px-8 glow-blob glow-primary">
            <h1 class="gradient-title text-5xl md:text-7xl font-extrabold mb-4 fade-in-up">
                "Hola, soy Juan Carlos"
            </h1>
            <h2 class="text-3xl text-accent font-semibold mb-8 fade-in-up stagger-1">
                "Desarrollador Front-end Junior"
            </h2>
            <p class="text-xl max-w-[600px] leading-relaxed fade-in-up stagger-2">
                "Recién graduado en "
                <span class="text-primary-light font-medium">
                    "Desarrollo de Aplicaciones Web (DAW)"
                </span>
                ". Me apasiona crear interfaces modernas y accesibles utilizando React y TypeScript. Durante mi formación, he desarrollado diversos proyectos que me han permitido adquirir experiencia práctica en tecnologías como HTML5, CSS3, JavaScript y frameworks modernos. Busco una oportunidad para aplicar mis conocimientos y seguir creciendo como desarrollador."
            </p>
        </section>
    }
}
