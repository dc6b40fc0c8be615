use yew::prelude::*;

use crate::context::Portal;
use crate::models::{Session, SignupForm};

pub struct UseAuthHandle {
    /// Snapshot de la sesión para renderizar
    pub session: Session,
    /// Probe inicial de /api/me todavía en vuelo
    pub checking: bool,
    /// Error de login/signup para mostrar inline en el formulario
    pub auth_error: Option<String>,
    /// Login/signup en vuelo (deshabilita el botón)
    pub busy: bool,
    pub login: Callback<(String, String)>,
    pub signup: Callback<SignupForm>,
    pub demo_login: Callback<()>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[hook]
pub fn use_auth(portal: &Portal) -> UseAuthHandle {
    let session = use_state(Session::anonymous);
    let checking = use_state(|| true);
    let auth_error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Verificar sesión al montar (cookie del navegador)
    {
        let portal = portal.clone();
        let session = session.clone();
        let checking = checking.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = portal.auth.check_session().await;
                session.set(portal.session.current());
                checking.set(false);
            });
            || ()
        });
    }

    // Login
    let login = {
        let portal = portal.clone();
        let session = session.clone();
        let auth_error = auth_error.clone();
        let busy = busy.clone();
        Callback::from(move |(login_id, password): (String, String)| {
            let portal = portal.clone();
            let session = session.clone();
            let auth_error = auth_error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                match portal.auth.login(&login_id, &password).await {
                    Ok(_) => {
                        portal.toasts.success("Login successful!");
                        auth_error.set(None);
                        session.set(portal.session.current());
                    }
                    Err(e) => {
                        // el mensaje del backend se muestra tal cual
                        auth_error.set(Some(e.message().to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    // Alta de cuenta
    let signup = {
        let portal = portal.clone();
        let session = session.clone();
        let auth_error = auth_error.clone();
        let busy = busy.clone();
        Callback::from(move |form: SignupForm| {
            let portal = portal.clone();
            let session = session.clone();
            let auth_error = auth_error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                match portal.auth.signup(&form).await {
                    Ok(_) => {
                        portal.toasts.success("Account created successfully!");
                        auth_error.set(None);
                        session.set(portal.session.current());
                    }
                    Err(e) => {
                        auth_error.set(Some(e.message().to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    // Cuenta demo
    let demo_login = {
        let portal = portal.clone();
        let session = session.clone();
        let auth_error = auth_error.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let portal = portal.clone();
            let session = session.clone();
            let auth_error = auth_error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                match portal.auth.demo_login().await {
                    Ok(_) => {
                        portal.toasts.success("Demo login successful!");
                        auth_error.set(None);
                        session.set(portal.session.current());
                    }
                    Err(e) => {
                        auth_error.set(Some(e.message().to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    // Logout: siempre efectivo localmente
    let logout = {
        let portal = portal.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let portal = portal.clone();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                portal.auth.logout().await;
                portal.toasts.success("Logged out successfully");
                session.set(portal.session.current());
            });
        })
    };

    let clear_error = {
        let auth_error = auth_error.clone();
        Callback::from(move |_| auth_error.set(None))
    };

    UseAuthHandle {
        session: (*session).clone(),
        checking: *checking,
        auth_error: (*auth_error).clone(),
        busy: *busy,
        login,
        signup,
        demo_login,
        logout,
        clear_error,
    }
}
