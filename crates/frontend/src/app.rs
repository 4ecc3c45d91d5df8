use crate::domain::a001_chat_session::ui::widget::ChatWidget;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ChatWidget />
        </ConfigProvider>
    }
}
