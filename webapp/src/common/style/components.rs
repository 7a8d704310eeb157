pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  cursor: pointer;
  border: none;
  outline: none;
  background: none;
  color: inherit;
  font: inherit;
}

.btn-primary {
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: white;
  font-size: 1.125rem;
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  transform: scale(1.05);
}

.btn-icon {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  color: var(--text-secondary);
  font-size: 1.25rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

/* Badges */
.skill-badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  background-color: var(--primary-soft);
  color: var(--primary-soft-text);
}
"#;
