//! Browser half of the navigation and reveal controllers.
//!
//! Buttons carrying `data-scroll-target` smooth-scroll to the matching id and
//! do nothing when the id is absent. Elements carrying `data-reveal` go from
//! their inline hidden style to visible once; in-view targets are unobserved
//! after the first intersection so exits never replay the animation.

pub const CLIENT_RUNTIME: &str = r#"
(function () {
  "use strict";

  function scrollToSection(id) {
    var element = document.getElementById(id);
    if (element) {
      element.scrollIntoView({ behavior: "smooth" });
    }
  }

  function reveal(element) {
    if (element.dataset.revealed === "true") {
      return;
    }
    element.dataset.revealed = "true";
    var delay = Number(element.dataset.revealDelay || 0);
    var duration = Number(element.dataset.revealDuration || 300);
    element.style.transition =
      "opacity " + duration + "ms ease-out " + delay + "ms, " +
      "transform " + duration + "ms ease-out " + delay + "ms";
    element.style.opacity = "1";
    element.style.transform = "none";
  }

  function bindNavigation() {
    document.querySelectorAll("[data-scroll-target]").forEach(function (button) {
      button.addEventListener("click", function () {
        scrollToSection(button.dataset.scrollTarget);
      });
    });
  }

  function bindReveals() {
    var inView = document.querySelectorAll('[data-reveal="in-view"]');
    if (!("IntersectionObserver" in window)) {
      inView.forEach(reveal);
    } else {
      var observer = new IntersectionObserver(function (entries) {
        entries.forEach(function (entry) {
          if (entry.isIntersecting) {
            reveal(entry.target);
            observer.unobserve(entry.target);
          }
        });
      });
      inView.forEach(function (element) { observer.observe(element); });
    }
    requestAnimationFrame(function () {
      document.querySelectorAll('[data-reveal="mount"]').forEach(reveal);
    });
  }

  function bindScrollSpy() {
    var links = document.querySelectorAll("[data-nav-link]");
    var sections = document.querySelectorAll("[data-section]");
    var header = document.querySelector(".site-nav");
    function update() {
      var line = window.scrollY + (header ? header.offsetHeight : 0);
      var active = null;
      sections.forEach(function (section) {
        if (section.offsetTop <= line) {
          active = section.id;
        }
      });
      links.forEach(function (link) {
        link.classList.toggle("active", link.dataset.navLink === active);
      });
    }
    window.addEventListener("scroll", update, { passive: true });
    update();
  }

  document.addEventListener("DOMContentLoaded", function () {
    bindNavigation();
    bindReveals();
    bindScrollSpy();
  });
})();
"#;
