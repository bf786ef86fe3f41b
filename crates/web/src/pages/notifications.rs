// =============================================================================
// Admin Web - Notification Composer Page
// =============================================================================

use admin_common::{options, NotificationPayload, TOPICS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::{Button, Card, Dropdown, Layout, SubmissionStatus, TextArea, TextField};
use crate::form::FormHandle;
use crate::state::AppState;

/// Compose and send a push notification.
#[component]
pub fn NotificationComposerPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = FormHandle::<NotificationPayload>::new();
    let can_submit = form.can_submit();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let client = app_state.client();
        form.submit(move |payload| async move { api::send_notification(&client, &payload).await });
    };

    view! {
        <Layout>
            <div class="page page-notifications">
                <h1 class="page-title">"Enviar notificación"</h1>
                <Card title="Nueva notificación">
                    <form class="form" on:submit=on_submit novalidate=true>
                        <TextField
                            id="title"
                            label="Título"
                            value=form.value("title")
                            on_change=form.on_change("title")
                            on_blur=form.on_blur("title")
                            error=form.error("title")
                            placeholder="Título de la notificación"
                            required=true
                            disabled=form.submitting()
                        />
                        <TextArea
                            id="description"
                            label="Descripción"
                            value=form.value("description")
                            on_change=form.on_change("description")
                            on_blur=form.on_blur("description")
                            error=form.error("description")
                            placeholder="Contenido del mensaje"
                            required=true
                            disabled=form.submitting()
                        />
                        <Dropdown
                            id="topic"
                            label="Tema"
                            value=form.value("topic")
                            options=options(TOPICS)
                            on_change=form.on_change("topic")
                            on_blur=form.on_blur("topic")
                            error=form.error("topic")
                            placeholder="Selecciona un tema"
                            required=true
                            disabled=form.submitting()
                        />
                        <SubmissionStatus phase=form.phase() />
                        <div class="form-actions">
                            <Button
                                label="Enviar"
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
