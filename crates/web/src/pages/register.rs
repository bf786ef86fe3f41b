// =============================================================================
// Admin Web - Register User Page
// =============================================================================

use admin_common::{options, RegisterPayload, ROLES};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::{Button, ButtonVariant, Card, Dropdown, Layout, SubmissionStatus, TextField};
use crate::form::FormHandle;
use crate::state::AppState;

/// Register a new dashboard user.
#[component]
pub fn RegisterUserPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = FormHandle::<RegisterPayload>::new();
    let can_submit = form.can_submit();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let client = app_state.client();
        form.submit(move |payload| async move { api::register_user(&client, &payload).await });
    };

    view! {
        <Layout>
            <div class="page page-register">
                <h1 class="page-title">"Registrar usuario"</h1>
                <Card>
                    <form class="form" on:submit=on_submit novalidate=true>
                        <TextField
                            id="name"
                            label="Nombre"
                            value=form.value("name")
                            on_change=form.on_change("name")
                            on_blur=form.on_blur("name")
                            error=form.error("name")
                            required=true
                            disabled=form.submitting()
                        />
                        <TextField
                            id="email"
                            label="Correo electrónico"
                            input_type="email"
                            value=form.value("email")
                            on_change=form.on_change("email")
                            on_blur=form.on_blur("email")
                            error=form.error("email")
                            placeholder="usuario@ejemplo.com"
                            required=true
                            disabled=form.submitting()
                        />
                        <TextField
                            id="password"
                            label="Contraseña"
                            input_type="password"
                            value=form.value("password")
                            on_change=form.on_change("password")
                            on_blur=form.on_blur("password")
                            error=form.error("password")
                            required=true
                            disabled=form.submitting()
                        />
                        <Dropdown
                            id="role"
                            label="Rol"
                            value=form.value("role")
                            options=options(ROLES)
                            on_change=form.on_change("role")
                            on_blur=form.on_blur("role")
                            error=form.error("role")
                            placeholder="Selecciona un rol"
                            required=true
                            disabled=form.submitting()
                        />
                        <SubmissionStatus phase=form.phase() />
                        <div class="form-actions">
                            <Button
                                label="Limpiar"
                                variant=ButtonVariant::Ghost
                                disabled=form.submitting()
                                on_click=Callback::new(move |_| form.reset())
                            />
                            <Button
                                label="Registrar"
                                button_type="submit"
                                disabled=Signal::derive(move || !can_submit.get())
                                loading=form.submitting()
                            />
                        </div>
                    </form>
                </Card>
            </div>
        </Layout>
    }
}
