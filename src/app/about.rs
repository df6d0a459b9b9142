use leptos::prelude::*;
use leptos_meta::Title;

const SKILLS: [&str; 12] = [
    "React",
    "TypeScript",
    "Node.js",
    "JavaScript",
    "HTML5",
    "CSS3",
    "Git",
    "SQL",
    "MongoDB",
    "Laravel",
    "Bootstrap",
    "Tailwind",
];

#[component]
fn AboutBlock(title: &'static str, stagger: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("mb-16 fade-in-up {stagger}")>
            <h3 class="text-accent text-3xl font-semibold mb-6">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub fn AboutMe() -> impl IntoView {
    view! {
        <Title text="Sobre Mí" />
        <section class="relative min-h-screen flex flex-col items-center px-8 py-24 glow-blob glow-right">
            <h2 class="gradient-title text-6xl font-extrabold text-center mb-12 fade-in-up">
                "Sobre Mí"
            </h2>
            <div class="max-w-[800px] w-full">
                <AboutBlock title="Mi Historia" stagger="stagger-1">
                    <p class="about-text">
                        "Mi pasión por el desarrollo web comenzó durante mi formación en DAW, donde descubrí el poder de crear experiencias digitales significativas. Como desarrollador front-end junior, combino creatividad y precisión técnica para construir interfaces que no solo son visualmente atractivas, sino también intuitivas y funcionales."
                    </p>
                    <p class="about-text">
                        "Durante mi formación, he cultivado una mentalidad de aprendizaje continuo y una fascinación por las últimas tecnologías web. Mi experiencia en proyectos académicos y personales me ha permitido desarrollar una sólida comprensión de las mejores prácticas de desarrollo y la importancia de escribir código limpio y mantenible."
                    </p>
                </AboutBlock>
                <AboutBlock title="¿Qué me hace diferente?" stagger="stagger-2">
                    <p class="about-text">
                        "Me destaco por mi capacidad para adaptarme rápidamente a nuevas tecnologías y mi compromiso con la excelencia en cada línea de código. Soy un firme defensor del trabajo en equipo y creo en la importancia de la comunicación efectiva en el desarrollo de software."
                    </p>
                    <p class="about-text">
                        "Mi formación técnica, combinada con mi creatividad y atención al detalle, me permite abordar los desafíos de desarrollo desde múltiples perspectivas, encontrando soluciones innovadoras que satisfacen tanto los requisitos técnicos como las necesidades del usuario final."
                    </p>
                </AboutBlock>
                <AboutBlock title="Tecnologías" stagger="stagger-3">
                    <p class="about-text">
                        "Mi stack tecnológico está en constante evolución, pero estas son algunas de las tecnologías con las que trabajo actualmente:"
                    </p>
                    <div class="grid grid-cols-[repeat(auto-fit,minmax(150px,1fr))] gap-6 mt-8">
                        {SKILLS
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <div class="card p-4 rounded-xl text-center hover:scale-105 transition-transform duration-200">
                                        {skill}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </AboutBlock>
            </div>
        </section>
    }
}
