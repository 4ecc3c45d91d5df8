//! Chat Widget - View Component

use super::view_model::ChatWidgetVm;
use crate::shared::icons::icon;
use contracts::domain::a001_chat_session::document::PDF_MIME;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatWidget() -> impl IntoView {
    let vm = ChatWidgetVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let is_waiting = Signal::derive(move || vm.is_waiting());

    // Прокрутка к последней записи при любом изменении истории или флага ожидания
    Effect::new(move |_| {
        vm.session.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| vm.send());

    view! {
        <div style="min-height: 100vh; display: flex; justify-content: center; align-items: center; padding: 16px; background: var(--colorNeutralBackground3);">
            <div style="width: 100%; max-width: 720px; height: 80vh; display: flex; flex-direction: column; padding: 20px; background: var(--colorNeutralBackground1); border-radius: 12px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);">
                <h1 style="font-size: 24px; font-weight: bold; text-align: center; margin: 8px 0 4px;">
                    "My Chatbot"
                </h1>
                <h2 style="font-size: 16px; font-weight: 600; text-align: center; margin: 0 0 12px;">
                    "Chat with Gemini"
                </h2>

                // Messages area
                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
                >
                    <For
                        each=move || vm.session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let is_user = msg.is_user();
                            view! {
                                <div
                                    style=if is_user {
                                        "align-self: flex-end; max-width: 80%; text-align: right; background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "align-self: flex-start; max-width: 80%; text-align: left; background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                </div>
                            }
                        }}
                    </For>

                    {move || {
                        is_waiting
                            .get()
                            .then(|| {
                                view! {
                                    <div style="align-self: flex-start; max-width: 80%; padding: 10px 14px; border-radius: 12px; background: var(--colorNeutralBackground2); font-style: italic; font-size: 14px; color: var(--colorNeutralForeground3);">
                                        "Typing..."
                                    </div>
                                }
                            })
                    }}

                    {move || {
                        vm.session
                            .with(|s| s.document().file_name().map(str::to_string))
                            .map(|name| {
                                view! {
                                    <div style="align-self: flex-start; max-width: 80%; padding: 8px 12px; border-radius: 6px; background: var(--color-success-50); color: var(--color-success);">
                                        {format!("✅ Uploaded: {}", name)}
                                    </div>
                                }
                            })
                    }}
                </div>

                // Upload control
                <div style="margin-top: 8px; display: flex; align-items: center; gap: 8px;">
                    <span style="color: var(--colorNeutralForeground3);">{icon("attach")}</span>
                    <input
                        type="file"
                        accept=PDF_MIME
                        on:change=move |ev| {
                            use wasm_bindgen::JsCast;
                            let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            else {
                                return;
                            };
                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                vm.upload(file);
                            }
                        }
                    />
                </div>

                // Input area
                <Flex style="margin-top: 12px; gap: 8px; align-items: center;">
                    <div style="flex: 1;">
                        <Input
                            value=vm.input
                            placeholder="Type your message..."
                            attr:style="width: 100%;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_waiting
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
