//! UI strings in Romanian and English.
//!
//! Pages look strings up by [`Text`] key with the current [`Lang`]; there is
//! no runtime loading.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::state::prefs::Lang;
use crate::state::profile::{GateError, PasswordChangeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    LoginTitle,
    RegisterTitle,
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    LoginButton,
    LoggingIn,
    RegisterButton,
    GoToRegister,
    GoToLogin,
    MissingCredentials,
    MissingFields,
    RegisterSuccess,
    Home,
    Discover,
    Profile,
    Logout,
    Balance,
    Transactions,
    Spending,
    DiscoverTitle,
    YourCategory,
    NoAds,
    Loading,
    EditProfile,
    EnterPasswordPrompt,
    Confirm,
    Cancel,
    Save,
    EmptyPassword,
    WrongPassword,
    ChangePassword,
    OldPassword,
    NewPassword,
    PasswordChanged,
    EmptyNewPassword,
    SamePassword,
    DeleteAccount,
    ConfirmDelete,
    ToggleTheme,
    ToggleLang,
}

/// Every key, for exhaustive checks.
pub const ALL_TEXTS: [Text; 44] = [
    Text::AppTitle,
    Text::LoginTitle,
    Text::RegisterTitle,
    Text::Username,
    Text::Password,
    Text::FirstName,
    Text::LastName,
    Text::Email,
    Text::LoginButton,
    Text::LoggingIn,
    Text::RegisterButton,
    Text::GoToRegister,
    Text::GoToLogin,
    Text::MissingCredentials,
    Text::MissingFields,
    Text::RegisterSuccess,
    Text::Home,
    Text::Discover,
    Text::Profile,
    Text::Logout,
    Text::Balance,
    Text::Transactions,
    Text::Spending,
    Text::DiscoverTitle,
    Text::YourCategory,
    Text::NoAds,
    Text::Loading,
    Text::EditProfile,
    Text::EnterPasswordPrompt,
    Text::Confirm,
    Text::Cancel,
    Text::Save,
    Text::EmptyPassword,
    Text::WrongPassword,
    Text::ChangePassword,
    Text::OldPassword,
    Text::NewPassword,
    Text::PasswordChanged,
    Text::EmptyNewPassword,
    Text::SamePassword,
    Text::DeleteAccount,
    Text::ConfirmDelete,
    Text::ToggleTheme,
    Text::ToggleLang,
];

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn t(lang: Lang, text: Text) -> &'static str {
    match lang {
        Lang::Ro => match text {
            Text::AppTitle => "Banca mea",
            Text::LoginTitle => "Autentificare",
            Text::RegisterTitle => "Cont nou",
            Text::Username => "Nume utilizator",
            Text::Password => "Parolă",
            Text::FirstName => "Prenume",
            Text::LastName => "Nume",
            Text::Email => "Email",
            Text::LoginButton => "Intră în cont",
            Text::LoggingIn => "Se conectează...",
            Text::RegisterButton => "Creează cont",
            Text::GoToRegister => "Nu ai cont? Înregistrează-te",
            Text::GoToLogin => "Ai deja cont? Autentifică-te",
            Text::MissingCredentials => "Introdu numele de utilizator și parola.",
            Text::MissingFields => "Completează toate câmpurile.",
            Text::RegisterSuccess => "Cont creat. Te poți autentifica.",
            Text::Home => "Acasă",
            Text::Discover => "Descoperă",
            Text::Profile => "Profil",
            Text::Logout => "Deconectare",
            Text::Balance => "Sold curent",
            Text::Transactions => "Tranzacții recente",
            Text::Spending => "Cheltuieli lunare",
            Text::DiscoverTitle => "Oferte pentru tine",
            Text::YourCategory => "Profilul tău financiar",
            Text::NoAds => "Nicio ofertă disponibilă.",
            Text::Loading => "Se încarcă...",
            Text::EditProfile => "Editează profilul",
            Text::EnterPasswordPrompt => "Introdu parola pentru a edita profilul.",
            Text::Confirm => "Confirmă",
            Text::Cancel => "Anulează",
            Text::Save => "Salvează",
            Text::EmptyPassword => "Te rugăm să introduci o parolă.",
            Text::WrongPassword => "Parolă greșită. Încearcă din nou.",
            Text::ChangePassword => "Schimbă parola",
            Text::OldPassword => "Parola veche",
            Text::NewPassword => "Parola nouă",
            Text::PasswordChanged => "Parola a fost schimbată.",
            Text::EmptyNewPassword => "Introdu parola nouă.",
            Text::SamePassword => "Parola nouă trebuie să fie diferită de cea veche.",
            Text::DeleteAccount => "Șterge contul",
            Text::ConfirmDelete => "Sigur vrei să ștergi contul?",
            Text::ToggleTheme => "Temă",
            Text::ToggleLang => "EN",
        },
        Lang::En => match text {
            Text::AppTitle => "My Bank",
            Text::LoginTitle => "Sign in",
            Text::RegisterTitle => "New account",
            Text::Username => "Username",
            Text::Password => "Password",
            Text::FirstName => "First name",
            Text::LastName => "Last name",
            Text::Email => "Email",
            Text::LoginButton => "Sign in",
            Text::LoggingIn => "Signing in...",
            Text::RegisterButton => "Create account",
            Text::GoToRegister => "No account? Register",
            Text::GoToLogin => "Already registered? Sign in",
            Text::MissingCredentials => "Enter your username and password.",
            Text::MissingFields => "Please fill in all fields.",
            Text::RegisterSuccess => "Account created. You can sign in now.",
            Text::Home => "Home",
            Text::Discover => "Discover",
            Text::Profile => "Profile",
            Text::Logout => "Log out",
            Text::Balance => "Current balance",
            Text::Transactions => "Recent transactions",
            Text::Spending => "Monthly spending",
            Text::DiscoverTitle => "Offers for you",
            Text::YourCategory => "Your financial profile",
            Text::NoAds => "No offers available.",
            Text::Loading => "Loading...",
            Text::EditProfile => "Edit profile",
            Text::EnterPasswordPrompt => "Enter your password to edit your profile.",
            Text::Confirm => "Confirm",
            Text::Cancel => "Cancel",
            Text::Save => "Save",
            Text::EmptyPassword => "Please enter a password.",
            Text::WrongPassword => "Wrong password. Please try again.",
            Text::ChangePassword => "Change password",
            Text::OldPassword => "Old password",
            Text::NewPassword => "New password",
            Text::PasswordChanged => "Password changed.",
            Text::EmptyNewPassword => "Enter a new password.",
            Text::SamePassword => "New password cannot be the same as the old one.",
            Text::DeleteAccount => "Delete account",
            Text::ConfirmDelete => "Are you sure you want to delete your account?",
            Text::ToggleTheme => "Theme",
            Text::ToggleLang => "RO",
        },
    }
}

/// Message for an edit-gate rejection. `None` for states that are not shown.
#[must_use]
pub fn gate_error(lang: Lang, error: GateError) -> Option<&'static str> {
    match error {
        GateError::EmptyPassword => Some(t(lang, Text::EmptyPassword)),
        GateError::WrongPassword => Some(t(lang, Text::WrongPassword)),
        GateError::NotPrompting | GateError::NotUnlocked => None,
    }
}

#[must_use]
pub fn password_change_error(lang: Lang, error: PasswordChangeError) -> &'static str {
    match error {
        PasswordChangeError::EmptyOld => t(lang, Text::EmptyPassword),
        PasswordChangeError::WrongOld => t(lang, Text::WrongPassword),
        PasswordChangeError::EmptyNew => t(lang, Text::EmptyNewPassword),
        PasswordChangeError::SamePassword => t(lang, Text::SamePassword),
    }
}
