use crate::models::Settings;

pub fn render_index(settings: &Settings) -> String {
    INDEX_HTML
        .replace("{{THEME}}", &settings.theme)
        .replace("{{VIEW_MODE}}", &settings.view_mode)
        .replace("{{SORT_BY}}", &settings.sort_by)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR" data-theme="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Desde</title>
  <style>
    :root {
      --bg-1: #f7f4ee;
      --bg-2: #ede5d8;
      --ink: #2b2a28;
      --muted: #6f6a63;
      --card: #ffffff;
      --line: rgba(43, 42, 40, 0.1);
      --accent: #e86a4a;
      --accent-ink: #ffffff;
      --danger: #c63b2b;
      --shadow: 0 18px 44px rgba(43, 42, 40, 0.12);

      --milestone-bronze: #b0713b;
      --milestone-silver: #8e9aa8;
      --milestone-gold: #c79a2a;
      --milestone-platinum: #7e8c8d;
      --milestone-diamond: #6aa5c8;
      --milestone-sapphire: #3f5fae;
      --milestone-infinity: #6a4fae;

      --gradient-bronze: linear-gradient(135deg, #b0713b, #d79a62);
      --gradient-silver: linear-gradient(135deg, #8e9aa8, #c4ccd6);
      --gradient-gold: linear-gradient(135deg, #c79a2a, #e9c15d);
      --gradient-platinum: linear-gradient(135deg, #7e8c8d, #b3bfbf);
      --gradient-diamond: linear-gradient(135deg, #6aa5c8, #a3d2ec);
      --gradient-sapphire: linear-gradient(135deg, #3f5fae, #7490d6);
      --gradient-infinity: linear-gradient(135deg, #6a4fae, #9e82df);
    }

    [data-theme='dark'] {
      --bg-1: #191817;
      --bg-2: #23211f;
      --ink: #ece8e1;
      --muted: #a49d93;
      --card: #262422;
      --line: rgba(236, 232, 225, 0.12);
      --shadow: 0 18px 44px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: 'Trebuchet MS', 'Segoe UI', sans-serif;
      padding: 28px 18px 48px;
    }

    .container {
      width: min(1020px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 22px;
    }

    .header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
    }

    .header h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .header-actions {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    button,
    select,
    input {
      font: inherit;
      color: inherit;
    }

    .btn {
      appearance: none;
      border: 1px solid var(--line);
      border-radius: 999px;
      background: var(--card);
      padding: 9px 16px;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    .btn:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      border-color: var(--accent);
      color: var(--accent-ink);
      font-weight: 600;
    }

    select.btn {
      padding-right: 28px;
    }

    .toggle-group {
      display: inline-flex;
      border: 1px solid var(--line);
      border-radius: 999px;
      overflow: hidden;
    }

    .toggle-group .btn {
      border: none;
      border-radius: 0;
      background: var(--card);
    }

    .toggle-group .btn.active {
      background: var(--accent);
      color: var(--accent-ink);
    }

    .add-panel {
      display: none;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .add-panel.open {
      display: block;
    }

    .add-panel form {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      gap: 14px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.82rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .field input {
      border: 1px solid var(--line);
      border-radius: 10px;
      background: var(--bg-1);
      padding: 9px 12px;
      min-width: 200px;
    }

    .habits {
      display: grid;
      gap: 16px;
    }

    .habits.mode-grid {
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    }

    .habits.mode-list {
      grid-template-columns: 1fr;
    }

    .habit-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .habit-card-header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-name {
      margin: 0;
      font-size: 1.15rem;
      overflow-wrap: anywhere;
    }

    .habit-delete-btn {
      appearance: none;
      border: none;
      background: transparent;
      cursor: pointer;
      font-size: 1rem;
      color: var(--danger);
    }

    .milestone-badge {
      justify-self: start;
      display: inline-flex;
      align-items: center;
      gap: 6px;
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.85rem;
      font-weight: 600;
      color: #fff;
    }

    .milestone-badge.bronze { background: var(--milestone-bronze); }
    .milestone-badge.silver { background: var(--milestone-silver); }
    .milestone-badge.gold { background: var(--milestone-gold); }
    .milestone-badge.platinum { background: var(--milestone-platinum); }
    .milestone-badge.diamond { background: var(--milestone-diamond); }
    .milestone-badge.sapphire { background: var(--milestone-sapphire); }
    .milestone-badge.infinity { background: var(--milestone-infinity); }

    .habit-since {
      margin: 0;
      color: var(--muted);
      font-size: 0.92rem;
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
    }

    .habit-since strong {
      color: var(--ink);
    }

    .habit-days {
      border-radius: 14px;
      color: #fff;
      padding: 14px;
      display: flex;
      align-items: baseline;
      gap: 8px;
    }

    .days-number {
      font-size: 2rem;
      font-weight: 700;
    }

    .milestone-progress {
      display: grid;
      gap: 6px;
    }

    .milestone-progress-bar {
      height: 8px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .milestone-progress-fill {
      height: 100%;
      border-radius: 999px;
    }

    .milestone-progress-fill.bronze { background: var(--milestone-bronze); }
    .milestone-progress-fill.silver { background: var(--milestone-silver); }
    .milestone-progress-fill.gold { background: var(--milestone-gold); }
    .milestone-progress-fill.platinum { background: var(--milestone-platinum); }
    .milestone-progress-fill.diamond { background: var(--milestone-diamond); }
    .milestone-progress-fill.sapphire { background: var(--milestone-sapphire); }
    .milestone-progress-fill.infinity { background: var(--milestone-infinity); }

    .milestone-progress-text {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .empty-state {
      display: none;
      background: var(--card);
      border: 1px dashed var(--line);
      border-radius: 18px;
      padding: 44px 20px;
      text-align: center;
      color: var(--muted);
    }

    .empty-state.visible {
      display: block;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.92rem;
      color: var(--muted);
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: #2d7a4b;
    }

    @media (max-width: 620px) {
      .header-actions {
        width: 100%;
      }
      .field input {
        min-width: 0;
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="container">
    <header class="header" role="banner">
      <h1>🗓️ Desde</h1>
      <nav class="header-actions" aria-label="Ações principais">
        <button class="btn btn-primary" id="open-add" type="button">+ Adicionar Hábito</button>
        <select class="btn" id="sort-select" aria-label="Ordenação">
          <option value="most-days">Mais dias</option>
          <option value="least-days">Menos dias</option>
          <option value="newest">Mais recentes</option>
          <option value="alphabetical">A–Z</option>
        </select>
        <div class="toggle-group" role="group" aria-label="Modo de visualização">
          <button class="btn" type="button" data-mode="grid" aria-pressed="false">▦</button>
          <button class="btn" type="button" data-mode="list" aria-pressed="false">☰</button>
        </div>
        <button class="btn" id="export-btn" type="button" aria-label="Exportar dados">⬇ Exportar</button>
        <button class="btn" id="import-btn" type="button" aria-label="Importar dados">⬆ Importar</button>
        <input id="import-file" type="file" accept="application/json" hidden />
        <button class="btn" id="theme-toggle" type="button" aria-label="Alternar tema">
          <span class="theme-icon">🌙</span>
        </button>
      </nav>
    </header>

    <section class="add-panel" id="add-panel" aria-label="Novo hábito">
      <form id="add-form">
        <div class="field">
          <label for="habit-name">Nome</label>
          <input id="habit-name" name="name" type="text" maxlength="60" placeholder="Meditação" required />
        </div>
        <div class="field">
          <label for="habit-start">Desde</label>
          <input id="habit-start" name="startDate" type="date" required />
        </div>
        <button class="btn btn-primary" type="submit">Salvar</button>
        <button class="btn" type="button" id="cancel-add">Cancelar</button>
      </form>
    </section>

    <section class="habits mode-{{VIEW_MODE}}" id="habits" aria-live="polite"></section>

    <div class="empty-state" id="empty-state">
      <p>Nenhum hábito ainda.</p>
      <p>Adicione o primeiro e comece a contar os dias.</p>
    </div>

    <div class="status" id="status" role="status"></div>
  </main>

  <script>
    const habitsEl = document.getElementById('habits');
    const emptyEl = document.getElementById('empty-state');
    const statusEl = document.getElementById('status');
    const sortSelect = document.getElementById('sort-select');
    const addPanel = document.getElementById('add-panel');
    const addForm = document.getElementById('add-form');
    const themeIcon = document.querySelector('.theme-icon');
    const modeButtons = Array.from(document.querySelectorAll('[data-mode]'));

    sortSelect.value = '{{SORT_BY}}';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) => {
      const div = document.createElement('div');
      div.textContent = value == null ? '' : String(value);
      return div.innerHTML;
    };

    const getSettings = async () => {
      const res = await fetch('/api/settings');
      if (!res.ok) {
        throw new Error('Não foi possível carregar as configurações');
      }
      return res.json();
    };

    const saveSettings = async (patch) => {
      const current = await getSettings();
      const res = await fetch('/api/settings', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(Object.assign(current, patch))
      });
      if (!res.ok) {
        throw new Error('Não foi possível salvar as configurações');
      }
      return res.json();
    };

    const renderCard = (habit) => {
      const name = escapeHtml(habit.name);
      const id = escapeHtml(habit.id);
      const since = escapeHtml(habit.formattedDate);
      const badge = habit.milestone;
      const next = habit.nextMilestone;

      const progress = next
        ? '<div class="milestone-progress">' +
          '<div class="milestone-progress-bar">' +
          '<div class="milestone-progress-fill ' + next.tier.color + '"' +
          ' style="width: ' + next.progress + '%"' +
          ' role="progressbar" aria-valuenow="' + next.progress + '"' +
          ' aria-valuemin="0" aria-valuemax="100"></div>' +
          '</div>' +
          '<p class="milestone-progress-text">' + escapeHtml(habit.progressText) + '</p>' +
          '</div>'
        : '';

      return '<article class="habit-card">' +
        '<div class="habit-card-header">' +
        '<h3 class="habit-name">' + name + '</h3>' +
        '<button class="habit-delete-btn" data-id="' + id + '" data-name="' + name + '"' +
        ' aria-label="Deletar hábito ' + name + '">🗑️</button>' +
        '</div>' +
        '<div class="milestone-badge ' + badge.color + '" aria-label="Marco ' + badge.name + '">' +
        '<span aria-hidden="true">' + badge.icon + '</span>' +
        '<span>' + badge.name + '</span>' +
        '</div>' +
        '<p class="habit-since"><span>Desde</span> <strong>' + since + '</strong></p>' +
        '<div class="habit-days" style="background: ' + badge.gradient + '">' +
        '<span class="days-number">' + habit.days + '</span>' +
        '<span class="days-label">' + habit.daysLabel + '</span>' +
        '</div>' +
        progress +
        '</article>';
    };

    const loadHabits = async () => {
      const res = await fetch('/api/habits');
      if (!res.ok) {
        throw new Error('Não foi possível carregar os hábitos');
      }
      const body = await res.json();
      habitsEl.innerHTML = body.habits.map(renderCard).join('');
      emptyEl.classList.toggle('visible', body.habits.length === 0);
    };

    const applyViewMode = (mode) => {
      habitsEl.classList.remove('mode-grid', 'mode-list');
      habitsEl.classList.add('mode-' + mode);
      modeButtons.forEach((button) => {
        const active = button.dataset.mode === mode;
        button.classList.toggle('active', active);
        button.setAttribute('aria-pressed', String(active));
      });
    };

    const applyTheme = (theme) => {
      document.documentElement.setAttribute('data-theme', theme);
      themeIcon.textContent = theme === 'dark' ? '☀️' : '🌙';
    };

    document.getElementById('open-add').addEventListener('click', () => {
      addPanel.classList.add('open');
      document.getElementById('habit-name').focus();
    });

    document.getElementById('cancel-add').addEventListener('click', () => {
      addPanel.classList.remove('open');
      addForm.reset();
    });

    addForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = document.getElementById('habit-name').value.trim();
      const startDate = document.getElementById('habit-start').value;
      if (!name || !startDate) {
        setStatus('Preencha nome e data de início.', 'error');
        return;
      }
      try {
        const res = await fetch('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name: name, startDate: startDate })
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Erro ao adicionar hábito');
        }
        addPanel.classList.remove('open');
        addForm.reset();
        await loadHabits();
        setStatus('Hábito adicionado.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    habitsEl.addEventListener('click', async (event) => {
      const button = event.target.closest('.habit-delete-btn');
      if (!button) {
        return;
      }
      if (!window.confirm('Deletar o hábito "' + button.dataset.name + '"?')) {
        return;
      }
      try {
        const res = await fetch('/api/habits/' + encodeURIComponent(button.dataset.id), {
          method: 'DELETE'
        });
        if (!res.ok) {
          throw new Error('Erro ao deletar hábito');
        }
        await loadHabits();
        setStatus('Hábito deletado.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    sortSelect.addEventListener('change', async () => {
      try {
        await saveSettings({ sortBy: sortSelect.value });
        await loadHabits();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    modeButtons.forEach((button) => {
      button.addEventListener('click', async () => {
        applyViewMode(button.dataset.mode);
        try {
          await saveSettings({ viewMode: button.dataset.mode });
        } catch (err) {
          setStatus(err.message, 'error');
        }
      });
    });

    document.getElementById('theme-toggle').addEventListener('click', async () => {
      const next = document.documentElement.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
      applyTheme(next);
      try {
        await saveSettings({ theme: next });
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('export-btn').addEventListener('click', async () => {
      try {
        const res = await fetch('/api/export');
        if (!res.ok) {
          throw new Error('Erro ao exportar dados');
        }
        const snapshot = await res.json();
        const blob = new Blob([JSON.stringify(snapshot, null, 2)], { type: 'application/json' });
        const url = URL.createObjectURL(blob);
        const link = document.createElement('a');
        link.href = url;
        link.download = 'desde-' + snapshot.exportDate.slice(0, 10) + '.json';
        link.click();
        URL.revokeObjectURL(url);
        setStatus('Dados exportados.', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('import-btn').addEventListener('click', () => {
      document.getElementById('import-file').click();
    });

    document.getElementById('import-file').addEventListener('change', async (event) => {
      const file = event.target.files[0];
      event.target.value = '';
      if (!file) {
        return;
      }
      try {
        const snapshot = JSON.parse(await file.text());
        const res = await fetch('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(snapshot)
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Arquivo de importação inválido');
        }
        const settings = await getSettings();
        applyTheme(settings.theme);
        applyViewMode(settings.viewMode);
        sortSelect.value = settings.sortBy;
        await loadHabits();
        setStatus('Dados importados.', 'ok');
      } catch (err) {
        setStatus('Importação falhou: ' + err.message, 'error');
      }
    });

    applyTheme('{{THEME}}');
    applyViewMode('{{VIEW_MODE}}');
    loadHabits().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
