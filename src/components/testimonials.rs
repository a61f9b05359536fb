use crate::data::Testimonial;
use crate::utils::dom::Element;
use crate::utils::format::escape_html;

pub const SLIDE_CLASS: &str = "swiper-slide h-auto";
/// Set on the container once slides were rendered into it.
pub const RENDERED_ATTRIBUTE: &str = "data-testimonials-rendered";

/// Appends one carousel slide per testimonial, in order.
///
/// Returns the number of slides added. A container that was already filled
/// is left alone so a second init cannot duplicate the slides.
pub fn render_testimonials<E: Element>(container: &E, testimonials: &[Testimonial]) -> usize {
    if container.attribute(RENDERED_ATTRIBUTE).as_deref() == Some("true") {
        log::warn!("Testimonials already rendered, skipping");
        return 0;
    }

    for testimonial in testimonials {
        container.append_html("div", SLIDE_CLASS, &slide_markup(testimonial));
    }
    container.set_attribute(RENDERED_ATTRIBUTE, "true");
    log::debug!("Rendered {} testimonial slides", testimonials.len());
    testimonials.len()
}

pub fn slide_markup(testimonial: &Testimonial) -> String {
    let stars = r#"<i class="fa-solid fa-star"></i>"#.repeat(5);
    format!(
        r#"
        <div class="bg-momentum-card p-8 rounded-2xl border border-white/5 h-full flex flex-col justify-between hover:border-blue-500/30 transition-colors">
            <div>
                <div class="flex text-yellow-400 mb-4 gap-1">{stars}</div>
                <p class="text-slate-300 italic mb-6">"{text}"</p>
            </div>
            <div class="flex items-center gap-4">
                <div class="w-10 h-10 rounded-full bg-slate-700 flex items-center justify-center text-white font-bold border border-white/10">
                    {initials}
                </div>
                <div>
                    <div class="font-bold text-white">{name}</div>
                    <div class="text-xs text-slate-500">{role} - {location}</div>
                </div>
            </div>
        </div>
        "#,
        stars = stars,
        text = escape_html(testimonial.text),
        initials = escape_html(testimonial.initials),
        name = escape_html(testimonial.name),
        role = escape_html(testimonial.role),
        location = escape_html(testimonial.location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TESTIMONIALS;
    use crate::test_utils::FakeElement;

    #[test]
    fn renders_one_slide_per_record_in_order() {
        let container = FakeElement::new();
        let added = render_testimonials(&container, &TESTIMONIALS);

        let slides = container.children();
        assert_eq!(added, TESTIMONIALS.len());
        assert_eq!(slides.len(), TESTIMONIALS.len());
        for (slide, testimonial) in slides.iter().zip(TESTIMONIALS.iter()) {
            assert_eq!(slide.tag, "div");
            assert_eq!(slide.class, SLIDE_CLASS);
            assert!(slide.inner_html.contains(&escape_html(testimonial.text)));
            assert!(slide.inner_html.contains(testimonial.initials));
            assert!(slide.inner_html.contains(&escape_html(testimonial.location)));
        }
    }

    #[test]
    fn second_render_does_not_duplicate_slides() {
        let container = FakeElement::new();
        render_testimonials(&container, &TESTIMONIALS[..2]);
        let added = render_testimonials(&container, &TESTIMONIALS[..2]);

        assert_eq!(added, 0);
        assert_eq!(container.children().len(), 2);
    }

    #[test]
    fn slide_markup_escapes_record_fields() {
        let testimonial = Testimonial {
            name: "<script>",
            location: "Mali",
            role: "Test",
            text: "a & b",
            initials: "XX",
        };
        let markup = slide_markup(&testimonial);
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("a &amp; b"));
        assert!(!markup.contains("<script>"));
        assert_eq!(markup.matches("fa-star").count(), 5);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let container = FakeElement::new();
        assert_eq!(render_testimonials(&container, &[]), 0);
        assert!(container.children().is_empty());
    }
}
