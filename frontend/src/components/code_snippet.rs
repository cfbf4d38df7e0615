use yew::prelude::*;
use web_sys::HtmlTextAreaElement;
use shared::rich_text::CodeSnippet;

#[derive(Properties, PartialEq)]
pub struct CodeSnippetEditorProps {
    pub snippet: CodeSnippet,
}

fn editor_rows(code: &str) -> u32 {
    code.lines().count().max(1) as u32
}

/// Titled, editable code block. Edits stay local to the page.
#[function_component(CodeSnippetEditor)]
pub fn code_snippet_editor(props: &CodeSnippetEditorProps) -> Html {
    let code = use_state(|| props.snippet.code.clone());

    // A different snippet replaces any local edits
    {
        let code = code.clone();
        use_effect_with(props.snippet.clone(), move |snippet| {
            code.set(snippet.code.clone());
            || ()
        });
    }

    let on_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    html! {
        <figure class="code-snippet" data-language={props.snippet.language.clone()}>
            <figcaption class="code-snippet-header">
                <span class="code-snippet-title">{props.snippet.title.clone()}</span>
                <span class="code-snippet-language">{props.snippet.language.clone()}</span>
            </figcaption>
            <textarea
                class={classes!("code-snippet-body", format!("language-{}", props.snippet.language))}
                spellcheck="false"
                rows={editor_rows(&code).to_string()}
                style="width: 100%; font-family: monospace; white-space: pre;"
                value={(*code).clone()}
                oninput={on_input}
            />
        </figure>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn snippet(title: &str, code: &str) -> CodeSnippet {
        CodeSnippet {
            title: title.to_string(),
            language: "rust".to_string(),
            code: code.to_string(),
        }
    }

    fn editor_value(root: &web_sys::Element) -> String {
        root.query_selector("textarea")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlTextAreaElement>()
            .unwrap()
            .value()
    }

    #[wasm_bindgen_test]
    async fn test_editor_follows_new_snippet() {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();

        let mut handle = yew::Renderer::<CodeSnippetEditor>::with_root_and_props(
            root.clone(),
            CodeSnippetEditorProps { snippet: snippet("a.rs", "fn a() {}") },
        )
        .render();
        yew::platform::time::sleep(Duration::ZERO).await;
        assert_eq!(editor_value(&root), "fn a() {}");

        handle.update(CodeSnippetEditorProps { snippet: snippet("b.rs", "fn b() {}") });
        // one pass for the new props, one for the state the effect sets
        yew::platform::time::sleep(Duration::ZERO).await;
        yew::platform::time::sleep(Duration::ZERO).await;
        assert_eq!(editor_value(&root), "fn b() {}");
    }
}
