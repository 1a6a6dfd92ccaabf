//! Animal Form Validation
//!
//! Client-side validation of the registration/update form, mirroring
//! the rules the backend enforces. Messages are the user-facing French
//! strings rendered next to each field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email regex"));
static POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("postal code regex"));

/// Validation errors keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Raw form values as typed by the user (age kept as entered text)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalForm {
    pub nom: String,
    pub espece: String,
    pub race: String,
    pub age: String,
    pub description: String,
    pub email: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
}

impl AnimalForm {
    /// Run every field rule; an empty map means the form is valid
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        validate_presence(&mut errors, "nom", &self.nom, 25);
        validate_presence(&mut errors, "espece", &self.espece, 25);
        validate_presence(&mut errors, "race", &self.race, 25);
        validate_presence(&mut errors, "description", &self.description, 500);
        validate_presence(&mut errors, "adresse", &self.adresse, 75);
        validate_presence(&mut errors, "ville", &self.ville, 75);

        validate_age(&mut errors, &self.age);
        validate_email(&mut errors, &self.email);
        validate_postal_code(&mut errors, &self.code_postal);

        errors
    }

    /// Age as a number, once `validate` reported no error on it
    pub fn parsed_age(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }
}

/// Required field with a maximum length
fn validate_presence(errors: &mut FieldErrors, field: &'static str, value: &str, max_length: usize) {
    if value.is_empty() {
        errors.insert(field, format!("{} est requis.", capitalize(field)));
    } else if value.chars().count() > max_length {
        errors.insert(
            field,
            format!("{} ne doit pas dépasser {} caractères.", capitalize(field), max_length),
        );
    }
}

fn validate_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "L'email est requis.".to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Le format de l'email est invalide.".to_string());
    }
}

fn validate_age(errors: &mut FieldErrors, age: &str) {
    let age = age.trim();
    if age.is_empty() {
        errors.insert("age", "L'âge est requis.".to_string());
    } else if age.parse::<i64>().is_err() {
        errors.insert("age", "L'âge doit être un entier.".to_string());
    } else if age.starts_with('-') {
        errors.insert("age", "L'âge doit être un entier positif.".to_string());
    }
}

fn validate_postal_code(errors: &mut FieldErrors, code_postal: &str) {
    if code_postal.is_empty() {
        errors.insert("code_postal", "Le code postal est requis.".to_string());
    } else if !POSTAL_RE.is_match(code_postal) {
        errors.insert("code_postal", "Le code postal doit contenir 5 chiffres.".to_string());
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AnimalForm {
        AnimalForm {
            nom: "Rex".to_string(),
            espece: "Chien".to_string(),
            race: "Berger allemand".to_string(),
            age: "4".to_string(),
            description: "Très joueur.".to_string(),
            email: "rex@refuge.fr".to_string(),
            adresse: "12 rue des Lilas".to_string(),
            ville: "Lyon".to_string(),
            code_postal: "69001".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = AnimalForm::default().validate();
        assert_eq!(errors["nom"], "Nom est requis.");
        assert_eq!(errors["espece"], "Espece est requis.");
        assert_eq!(errors["age"], "L'âge est requis.");
        assert_eq!(errors["email"], "L'email est requis.");
        assert_eq!(errors["code_postal"], "Le code postal est requis.");
    }

    #[test]
    fn test_field_too_long() {
        let mut form = valid_form();
        form.nom = "x".repeat(26);
        let errors = form.validate();
        assert_eq!(errors["nom"], "Nom ne doit pas dépasser 25 caractères.");
    }

    #[test]
    fn test_invalid_email_format() {
        let mut form = valid_form();
        form.email = "pas-un-email".to_string();
        let errors = form.validate();
        assert_eq!(errors["email"], "Le format de l'email est invalide.");
    }

    #[test]
    fn test_age_must_be_an_integer() {
        let mut form = valid_form();
        form.age = "quatre".to_string();
        assert_eq!(form.validate()["age"], "L'âge doit être un entier.");

        form.age = "-2".to_string();
        assert_eq!(form.validate()["age"], "L'âge doit être un entier positif.");
    }

    #[test]
    fn test_postal_code_needs_five_digits() {
        let mut form = valid_form();
        form.code_postal = "690".to_string();
        assert_eq!(
            form.validate()["code_postal"],
            "Le code postal doit contenir 5 chiffres."
        );
    }
}
