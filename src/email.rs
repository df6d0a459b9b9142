use serde::Serialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::review::Review;

pub const REVIEW_CREATED_SUBJECT: &str = "⭐ Nueva reseña en el portafolio";
pub const REVIEW_DELETED_SUBJECT: &str = "Reseña eliminada del portafolio";
const SYSTEM_NAME: &str = "Sistema";
const SYSTEM_EMAIL: &str = "sistema@reviews.com";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Falta el campo {0}")]
    MissingField(&'static str),
    #[error("Email no válido: {0}")]
    InvalidEmail(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("EmailJS rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Variables consumed by the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), EmailError> {
        let fields = [
            ("nombre", &self.name),
            ("email", &self.email),
            ("asunto", &self.subject),
            ("mensaje", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(EmailError::MissingField(*field));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(EmailError::InvalidEmail(email.to_string())),
        }
    }

    pub fn into_params(self) -> Result<TemplateParams, EmailError> {
        self.validate()?;
        Ok(TemplateParams {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

pub fn review_created(review: &Review) -> TemplateParams {
    let message = format!(
        "¡Has recibido una nueva reseña en tu portafolio!\n\n\
         Autor: {}\n\
         Empresa: {}\n\
         Calificación: {}\n\
         Comentario: {}\n\n\
         Esta reseña ya está visible en tu portafolio.",
        review.author,
        review.company,
        "⭐".repeat(review.rating as usize),
        review.text,
    );
    TemplateParams {
        name: review.author.clone(),
        // the review form doesn't ask for an address
        email: review.author.clone(),
        subject: REVIEW_CREATED_SUBJECT.to_string(),
        message,
    }
}

pub fn review_deleted(id: i64) -> TemplateParams {
    TemplateParams {
        name: SYSTEM_NAME.to_string(),
        email: SYSTEM_EMAIL.to_string(),
        subject: REVIEW_DELETED_SUBJECT.to_string(),
        message: format!("Se ha eliminado una reseña del portafolio.\nID de la reseña: {id}"),
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Thin client for the EmailJS REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    api_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailClient {
    pub fn from_config(conf: &SiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: conf.emailjs_api_url.clone(),
            service_id: conf.emailjs_service_id.clone(),
            template_id: conf.emailjs_template_id.clone(),
            public_key: conf.emailjs_public_key.clone(),
        }
    }

    fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        }
    }

    pub async fn send(&self, params: &TemplateParams) -> Result<(), EmailError> {
        let response = self
            .http
            .post(&self.api_url)
            .json(&self.request_body(params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        log::info!("email sent: {}", params.subject);
        Ok(())
    }

    /// Fire-and-forget variant for side effects that must not block the UI.
    pub async fn notify(&self, params: TemplateParams) {
        if let Err(e) = self.send(&params).await {
            log::error!("failed to send notification '{}': {e}", params.subject);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hola".to_string(),
            message: "Me interesa tu perfil".to_string(),
        }
    }

    #[test]
    fn test_contact_validation() {
        assert!(contact().validate().is_ok());

        let mut missing = contact();
        missing.subject = "  ".to_string();
        assert!(matches!(
            missing.validate(),
            Err(EmailError::MissingField("asunto"))
        ));

        for bad in ["ana", "@example.com", "ana@"] {
            let mut msg = contact();
            msg.email = bad.to_string();
            assert!(
                matches!(msg.validate(), Err(EmailError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_contact_into_params_trims() {
        let mut msg = contact();
        msg.name = "  Ana  ".to_string();
        let params = msg.into_params().unwrap();
        assert_eq!(params.name, "Ana");
        assert_eq!(params.email, "ana@example.com");
    }

    #[test]
    fn test_review_created_notification() {
        let review = Review {
            id: 42,
            text: "Gran trabajo".to_string(),
            author: "Pepe".to_string(),
            company: "Vinos SL".to_string(),
            rating: 3,
        };
        let params = review_created(&review);
        assert_eq!(params.name, "Pepe");
        assert_eq!(params.subject, REVIEW_CREATED_SUBJECT);
        assert!(params.message.contains("Autor: Pepe"));
        assert!(params.message.contains("Empresa: Vinos SL"));
        assert!(params.message.contains("Calificación: ⭐⭐⭐\n"));
        assert!(params.message.contains("Comentario: Gran trabajo"));
        assert!(params.message.ends_with("Esta reseña ya está visible en tu portafolio."));
    }

    #[test]
    fn test_review_deleted_notification() {
        let params = review_deleted(1712345678901);
        assert_eq!(params.name, "Sistema");
        assert_eq!(params.email, "sistema@reviews.com");
        assert_eq!(params.subject, REVIEW_DELETED_SUBJECT);
        assert!(params.message.ends_with("ID de la reseña: 1712345678901"));
    }

    fn test_config(api_url: &str) -> SiteConfig {
        SiteConfig {
            emailjs_api_url: api_url.to_string(),
            emailjs_service_id: "svc".to_string(),
            emailjs_template_id: "tpl".to_string(),
            emailjs_public_key: "pub".to_string(),
            admin_password: "x".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailClient::from_config(&test_config("https://example.invalid/send"));
        let params = review_deleted(7);
        let body = serde_json::to_value(client.request_body(&params)).unwrap();
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pub");
        assert_eq!(body["template_params"]["name"], "Sistema");
        assert_eq!(body["template_params"]["subject"], REVIEW_DELETED_SUBJECT);
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "template_params": { "name": "Sistema" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let client = EmailClient::from_config(&test_config(&format!("{}/send", server.uri())));
        client.send(&review_deleted(3)).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad template"))
            .mount(&server)
            .await;

        let client = EmailClient::from_config(&test_config(&format!("{}/send", server.uri())));
        match client.send(&review_deleted(3)).await {
            Err(EmailError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad template");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_unreachable() {
        // nothing listens on port 1
        let client = EmailClient::from_config(&test_config("http://127.0.0.1:1/send"));
        let res = client.send(&review_deleted(3)).await;
        assert!(matches!(res, Err(EmailError::Http(_))), "got {res:?}");
    }
}
