use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span class="eyebrow">{ props.eyebrow.clone() }</span>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p>{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
