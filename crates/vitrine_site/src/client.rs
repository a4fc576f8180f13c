//! Inline client behavior
//!
//! The page is rendered once, server-side. This script drives the hooks the
//! components leave in the markup:
//!
//! - `data-action` on the switcher: mirrors the new theme onto the root
//!   attributes and saves it under the preference storage keys
//! - `data-open-dialog` on project cards: opens the matching `<dialog>`
//! - `#cursor-follower` and `#ambient-light`: follow the pointer, with the
//!   ambient layer pulsing between its `data-opacity` bounds
//! - `#cursor-ripple`: cloned on click, particles thrown to `data-x`/`data-y`

use vitrine_theme::{ColorScheme, COLOR_SCHEME_ATTR, COLOR_SCHEME_KEY, THEME_MODE_ATTR, THEME_MODE_KEY};

use crate::components::switcher::SwitcherAction;

const BEHAVIOR: &str = r##"(() => {
  const root = document.documentElement;

  const apply = (scheme, mode) => {
    root.setAttribute(vitrine.schemeAttr, scheme);
    root.setAttribute(vitrine.modeAttr, mode);
    root.classList.toggle("dark", mode === "dark");
    try {
      localStorage.setItem(vitrine.schemeKey, scheme);
      localStorage.setItem(vitrine.modeKey, mode);
    } catch (_) {}
    document.querySelectorAll("[data-action]").forEach((button) => {
      const action = button.getAttribute("data-action");
      if (action.startsWith(vitrine.select)) {
        button.setAttribute("aria-pressed", String(action === vitrine.select + scheme));
      }
    });
  };

  const run = (action) => {
    const scheme = root.getAttribute(vitrine.schemeAttr);
    const mode = root.getAttribute(vitrine.modeAttr);
    if (action === vitrine.toggle) {
      apply(scheme, mode === "dark" ? "light" : "dark");
    } else if (action === vitrine.shuffle) {
      const others = vitrine.schemes.filter((s) => s !== scheme);
      apply(others[Math.floor(Math.random() * others.length)], mode);
    } else if (action.startsWith(vitrine.select)) {
      const next = action.slice(vitrine.select.length);
      if (vitrine.schemes.includes(next)) apply(next, mode);
    }
  };

  const follower = document.getElementById("cursor-follower");
  const ambient = document.getElementById("ambient-light");
  const ripple = document.getElementById("cursor-ripple");
  const [low, high] = (ambient ? ambient.getAttribute("data-opacity") : "0 0").split(" ");
  let idle;

  document.addEventListener("pointermove", (event) => {
    const at = `translate(${event.clientX}px, ${event.clientY}px)`;
    if (follower) follower.style.transform = at;
    if (ambient) {
      ambient.style.transform = at;
      ambient.style.opacity = high;
      clearTimeout(idle);
      idle = setTimeout(() => { ambient.style.opacity = low; }, 800);
    }
  });

  document.addEventListener("click", (event) => {
    const actionButton = event.target.closest("[data-action]");
    if (actionButton) run(actionButton.getAttribute("data-action"));

    const opener = event.target.closest("[data-open-dialog]");
    if (opener) {
      const dialog = document.getElementById(opener.getAttribute("data-open-dialog"));
      if (dialog && !dialog.open) dialog.showModal();
    }

    if (ripple) {
      const burst = ripple.content.firstElementChild.cloneNode(true);
      burst.style.left = `${event.clientX - 24}px`;
      burst.style.top = `${event.clientY - 24}px`;
      document.body.appendChild(burst);
      burst.firstElementChild.animate(
        [{ transform: "scale(0)", opacity: 1 }, { transform: "scale(2)", opacity: 0 }],
        { duration: 600, easing: "ease-out" }
      );
      burst.querySelectorAll("[data-x]").forEach((particle) => {
        particle.style.left = "20px";
        particle.style.top = "20px";
        const x = particle.getAttribute("data-x");
        const y = particle.getAttribute("data-y");
        particle.animate(
          [{ transform: "translate(0, 0)", opacity: 1 }, { transform: `translate(${x}px, ${y}px)`, opacity: 0 }],
          { duration: 600, easing: "ease-out", fill: "forwards" }
        );
      });
      setTimeout(() => burst.remove(), 600);
    }
  });
})();"##;

/// Script body for the end of `<body>`
///
/// Scheme ids, action names, root attributes and storage keys are written
/// from the same constants the renderer and the store use.
pub fn client_script() -> String {
    let schemes = ColorScheme::all()
        .iter()
        .map(|scheme| format!("\"{}\"", scheme.id()))
        .collect::<Vec<_>>()
        .join(",");
    let select = SwitcherAction::Select(ColorScheme::Cyan).to_string();
    let select = select.trim_end_matches(ColorScheme::Cyan.id());

    format!(
        "const vitrine={{schemes:[{schemes}],toggle:\"{}\",shuffle:\"{}\",select:\"{select}\",schemeAttr:\"{COLOR_SCHEME_ATTR}\",modeAttr:\"{THEME_MODE_ATTR}\",schemeKey:\"{COLOR_SCHEME_KEY}\",modeKey:\"{THEME_MODE_KEY}\"}};\n{BEHAVIOR}",
        SwitcherAction::ToggleMode,
        SwitcherAction::Shuffle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_matches_store_constants() {
        let script = client_script();
        assert!(script.starts_with(
            r#"const vitrine={schemes:["cyan","purple","blue","orange","green"],toggle:"toggle-mode",shuffle:"shuffle",select:"select:",schemeAttr:"data-color-scheme",modeAttr:"data-theme",schemeKey:"colorScheme",modeKey:"themeMode"};"#
        ));
    }

    #[test]
    fn script_cannot_close_its_own_tag() {
        assert!(!client_script().contains("</"));
    }
}
