pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;          /* Accent blue for the light variant */
  --primary-dark: #1D4ED8;
  --primary-soft: #DBEAFE;
  --primary-soft-text: #1E40AF;
  --gradient-from: #60A5FA;
  --gradient-to: #A855F7;

  /* Neutrals */
  --neutral-100: #F3F4F6;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --border: transparent;

  /* Text Colors */
  --text-primary: var(--neutral-800);
  --text-secondary: var(--neutral-600);
  --text-body: var(--neutral-700);
  --text-muted: var(--neutral-500);
  --heading-accent: var(--neutral-800);

  /* Layout */
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark variant, switched by the class on <body> and mirrored on the page root */
body.dark,
.page.dark {
  --primary: #DC2626;
  --primary-dark: #B91C1C;
  --primary-soft: #7F1D1D;
  --primary-soft-text: #FEE2E2;
  --gradient-from: #DC2626;
  --gradient-to: #991B1B;

  --background: #000000;
  --surface: #111827;
  --border: #1F2937;

  --text-primary: #FFFFFF;
  --text-secondary: #FFFFFF;
  --text-body: var(--neutral-300);
  --text-muted: var(--neutral-400);
  --heading-accent: var(--primary);
}
"#;
