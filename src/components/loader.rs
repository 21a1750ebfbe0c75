use yew::prelude::*;

/// Full-screen splash shown while the shell starts up.
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader-screen">
            <div class="loader-ring"></div>
            <h1 class="loader-title">{"BASEL DYNAMICS TECH"}</h1>
            <p class="loader-tagline">{"Loading the future..."}</p>
            <style>
                {r#"
                .loader-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #000;
                    color: #fff;
                }
                .loader-ring {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    border: 3px solid rgba(255, 157, 38, 0.2);
                    border-top-color: #ff9d26;
                    animation: loader-spin 1s linear infinite;
                }
                .loader-title {
                    font-size: 1.5rem;
                    letter-spacing: 0.3em;
                    color: #ff9d26;
                    text-shadow: 0 0 12px rgba(255, 157, 38, 0.6);
                }
                .loader-tagline {
                    color: #999;
                    animation: loader-pulse 1.5s ease-in-out infinite;
                }
                @keyframes loader-spin {
                    to { transform: rotate(360deg); }
                }
                @keyframes loader-pulse {
                    0%, 100% { opacity: 0.4; }
                    50% { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
