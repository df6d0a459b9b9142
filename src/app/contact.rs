use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::{FromToStringCodec, JsonSerdeWasmCodec};
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::admin::{AdminGate, AdminSession};
#[cfg(feature = "hydrate")]
use crate::config::{ADMIN_STORAGE_KEY, REVIEWS_STORAGE_KEY};
use crate::config::SITE_CONFIG;
use crate::email::{ContactMessage, EmailClient, EmailError, TemplateParams};
#[cfg(feature = "hydrate")]
use crate::review::StoredReviews;
use crate::review::{NewReview, Review, ReviewBoard, ReviewSink, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Invalid(String),
    Failed,
}

impl FormStatus {
    fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Enviando mensaje...".to_string()),
            Self::Sent => Some(
                "¡Mensaje enviado con éxito! Me pondré en contacto contigo pronto.".to_string(),
            ),
            Self::Invalid(s) => Some(s.clone()),
            Self::Failed => Some(
                "Hubo un error al enviar el mensaje. Por favor, intenta de nuevo.".to_string(),
            ),
        }
    }

    fn is_err(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Failed)
    }
}

/// Sends a notification in the background; failures are only logged.
fn notify(params: TemplateParams) {
    let client = EmailClient::from_config(&SITE_CONFIG);
    spawn_local(async move {
        client.notify(params).await;
    });
}

/// Board side effects in the browser: local storage and EmailJS.
#[derive(Clone, Copy)]
struct BrowserSink {
    #[cfg(feature = "hydrate")]
    stored: WriteSignal<Option<StoredReviews>>,
}

impl ReviewSink for BrowserSink {
    fn persist(&mut self, reviews: &[Review]) {
        #[cfg(feature = "hydrate")]
        self.stored.set(Some(StoredReviews(reviews.to_vec())));
        #[cfg(not(feature = "hydrate"))]
        let _ = reviews;
    }

    fn notify(&mut self, params: TemplateParams) -> Result<(), EmailError> {
        notify(params);
        Ok(())
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let gate = StoredValue::new(AdminGate::from_config(&SITE_CONFIG));
    let board = RwSignal::new(ReviewBoard::seeded());
    let session = RwSignal::new(AdminSession::Visitor);
    let show_admin_modal = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (stored_reviews, set_stored_reviews, _) =
        use_local_storage::<Option<StoredReviews>, JsonSerdeWasmCodec>(REVIEWS_STORAGE_KEY);
    #[cfg(feature = "hydrate")]
    let (stored_admin, set_stored_admin, clear_stored_admin) =
        use_local_storage::<bool, FromToStringCodec>(ADMIN_STORAGE_KEY);
    #[cfg(feature = "hydrate")]
    let clear_stored_admin = Callback::new(move |_: ()| clear_stored_admin());

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            board.set(ReviewBoard::from_stored(
                stored_reviews.get_untracked().map(|s| s.0),
            ));
            session.set(AdminSession::from_stored(stored_admin.get_untracked()));
        },
        true,
    );

    let sink = BrowserSink {
        #[cfg(feature = "hydrate")]
        stored: set_stored_reviews,
    };

    let set_session = move |new: AdminSession| {
        session.set(new);
        #[cfg(feature = "hydrate")]
        {
            if new.is_admin() {
                set_stored_admin.set(true);
            } else {
                clear_stored_admin.run(());
            }
        }
    };

    let login = move |attempt: String| -> Result<(), String> {
        let new = gate
            .with_value(|g| g.check(&attempt))
            .map_err(|e| e.to_string())?;
        log::info!("admin mode enabled");
        set_session(new);
        show_admin_modal.set(false);
        Ok(())
    };

    let delete_review = move |id: i64| {
        let mut sink = sink;
        if let Some(Err(e)) =
            board.try_update(|b| b.delete(id, session.get_untracked(), &mut sink))
        {
            log::warn!("couldn't delete review {id}: {e}");
        }
    };

    let add_review = move |new: NewReview| -> Result<(), String> {
        let now = chrono::Utc::now().timestamp_millis();
        let mut sink = sink;
        board
            .try_update(|b| b.submit(new, now, &mut sink))
            .ok_or_else(|| "No se pudo guardar la reseña".to_string())?
            .map(|_| ())
            .map_err(|e| e.to_string())
    };

    view! {
        <Title text="Contacto" />
        <section class="relative min-h-screen flex flex-col items-center px-8 py-24 glow-blob glow-accent-left">
            <h2 class="gradient-title text-6xl font-extrabold text-center mb-12 fade-in-up">
                "Contacto"
            </h2>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 max-w-[1200px] w-full">
                <div class="card p-8 rounded-2xl fade-in-up stagger-1">
                    <ContactForm />
                    <ReviewForm on_submit=add_review />
                </div>
                <div class="flex flex-col gap-8 fade-in-up stagger-2">
                    <For
                        each=move || board.with(|b| b.reviews().to_vec())
                        key=|review| review.id
                        children=move |review: Review| {
                            view! {
                                <TestimonialCard
                                    review
                                    is_admin=Signal::derive(move || session.get().is_admin())
                                    on_delete=delete_review
                                />
                            }
                        }
                    />
                </div>
            </div>
            <button
                class="fixed bottom-5 right-5 card flex items-center gap-2 px-4 py-2 rounded-lg hover:text-heading hover:scale-105 transition-all"
                on:click=move |_| {
                    if session.get_untracked().is_admin() {
                        log::info!("admin mode disabled");
                        set_session(AdminSession::Visitor);
                    } else {
                        show_admin_modal.set(true);
                    }
                }
            >
                {move || {
                    if session.get().is_admin() {
                        "🔓 Salir modo admin"
                    } else {
                        "🔒 Modo admin"
                    }
                }}
            </button>
            <Show when=move || show_admin_modal.get()>
                <AdminModal on_login=login on_close=move |_| show_admin_modal.set(false) />
            </Show>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let params = match msg.into_params() {
            Ok(p) => p,
            Err(e) => {
                status.set(FormStatus::Invalid(e.to_string()));
                return;
            }
        };
        status.set(FormStatus::Sending);
        let client = EmailClient::from_config(&SITE_CONFIG);
        spawn_local(async move {
            match client.send(&params).await {
                Ok(()) => {
                    _ = status.try_set(FormStatus::Sent);
                    for field in [name, email, subject, message] {
                        _ = field.try_set(String::new());
                    }
                }
                Err(e) => {
                    log::error!("Error al enviar el mensaje: {e}");
                    _ = status.try_set(FormStatus::Failed);
                }
            }
        });
    };

    view! {
        {move || {
            let st = status.get();
            st.message()
                .map(|text| {
                    let class = if st.is_err() { "status-msg status-err" } else { "status-msg status-ok" };
                    view! { <div class=class>{text}</div> }
                })
        }}
        <form class="flex flex-col gap-6" on:submit=on_submit>
            <input class="field" type="text" name="name" placeholder="Nombre" required bind:value=name />
            <input class="field" type="email" name="email" placeholder="Email" required bind:value=email />
            <input class="field" type="text" name="subject" placeholder="Asunto" required bind:value=subject />
            <textarea class="field min-h-[150px] resize-y" name="message" placeholder="Mensaje" required bind:value=message></textarea>
            <button
                type="submit"
                class="btn-gradient"
                disabled=move || status.get() == FormStatus::Sending
            >
                "Enviar Mensaje"
            </button>
        </form>
    }
}

#[component]
fn ReviewForm<F>(on_submit: F) -> impl IntoView
where
    F: Fn(NewReview) -> Result<(), String> + Copy + Send + Sync + 'static,
{
    let rating = RwSignal::new(MAX_RATING);
    let author = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let new = NewReview {
            text: comment.get_untracked(),
            author: author.get_untracked(),
            company: company.get_untracked(),
            rating: rating.get_untracked(),
        };
        match on_submit(new) {
            Ok(()) => {
                error.set(None);
                rating.set(MAX_RATING);
                for field in [author, company, comment] {
                    field.set(String::new());
                }
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <div class="card p-8 rounded-2xl mt-8">
            <h3 class="text-heading text-xl font-semibold mb-4">"Deja tu reseña"</h3>
            <form class="flex flex-col gap-6" on:submit=submit>
                <div class="flex gap-2" role="radiogroup" aria-label="Calificación">
                    {(MIN_RATING..=MAX_RATING)
                        .map(|star| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if star <= rating.get() { "star star-on" } else { "star" }
                                    }
                                    aria-label=format!("{star} estrellas")
                                    on:click=move |_| rating.set(star)
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input class="field" type="text" name="reviewer_name" placeholder="Tu nombre" required bind:value=author />
                <input class="field" type="text" name="reviewer_company" placeholder="Empresa" required bind:value=company />
                <textarea class="field min-h-[150px] resize-y" placeholder="Tu comentario" required bind:value=comment></textarea>
                {move || error.get().map(|e| view! { <div class="status-msg status-err">{e}</div> })}
                <button type="submit" class="btn-gradient">
                    "Publicar Reseña"
                </button>
            </form>
        </div>
    }
}

#[component]
fn TestimonialCard<F>(review: Review, is_admin: Signal<bool>, on_delete: F) -> impl IntoView
where
    F: Fn(i64) + Copy + Send + Sync + 'static,
{
    let id = review.id;
    view! {
        <div class="card p-6 rounded-2xl hover:-translate-y-1 transition-transform fade-in-up">
            <div class="flex justify-between items-start">
                <div class="text-[#ffd700] mb-4">{"★".repeat(review.rating as usize)}</div>
                <Show when=move || is_admin.get()>
                    <button
                        class="text-red-500 opacity-60 hover:opacity-100 hover:scale-110 transition p-2 rounded"
                        aria-label="Eliminar reseña"
                        on:click=move |_| on_delete(id)
                    >
                        "🗑"
                    </button>
                </Show>
            </div>
            <p class="leading-relaxed mb-4">{review.text}</p>
            <div class="text-heading font-semibold">
                {format!("{} - {}", review.author, review.company)}
            </div>
        </div>
    }
}

#[component]
fn AdminModal<L>(on_login: L, #[prop(into)] on_close: Callback<()>) -> impl IntoView
where
    L: Fn(String) -> Result<(), String> + Copy + Send + Sync + 'static,
{
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let attempt = move || match on_login(password.get_untracked()) {
        Ok(()) => {
            _ = password.try_set(String::new());
        }
        Err(e) => {
            password.set(String::new());
            error.set(Some(e));
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/70 z-[999] fade-in" on:click=move |_| on_close.run(())></div>
        <div class="fixed top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 card p-8 rounded-2xl z-[1000] fade-in-up">
            <h3 class="text-heading text-xl font-semibold mb-4">"Acceso Administrador"</h3>
            <input
                class="field w-full"
                type="password"
                placeholder="Contraseña"
                bind:value=password
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        attempt();
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="status-msg status-err mt-4">{e}</div> })}
            <button class="btn-gradient mt-4 w-full" on:click=move |_| attempt()>
                "Acceder"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_status_messages() {
        assert_eq!(FormStatus::Idle.message(), None);
        assert_eq!(
            FormStatus::Sending.message().as_deref(),
            Some("Enviando mensaje...")
        );
        assert!(FormStatus::Sent.message().unwrap().starts_with("¡Mensaje enviado"));
        assert!(!FormStatus::Sent.is_err());
        assert!(FormStatus::Failed.is_err());
        assert!(FormStatus::Invalid("Falta el campo nombre".to_string()).is_err());
    }
}
