//! Fixed player bundle for exported presentations
//!
//! The exported artifact is assembled from three constant assets — an HTML
//! skeleton, a stylesheet, and the player script — plus the injected slide
//! data and theme values. The script implements the same contract as the
//! `runtime` module: circular navigation that clears the overlay on every
//! transition, toggle-style tool selection with the drawing tools and the
//! laser mutually exclusive, incremental stroke compositing, and an index
//! panel whose entries jump and close.
//!
//! Nothing in these constants is deck-specific; all data arrives through
//! the `SLIDES`, `MARKER_OP` and CSS custom-property injection points in
//! `html.rs`.

/// Player stylesheet. Theme values arrive as CSS custom properties.
pub const PLAYER_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    background: var(--stage-bg);
    height: 100vh;
    overflow: hidden;
    user-select: none;
}

/* Stage and slides: exactly one .slide carries .active at a time */
.stage {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10;
}

.slide {
    width: 90%;
    max-width: var(--canvas-w);
    aspect-ratio: var(--canvas-aspect);
    background: var(--card-bg);
    color: #1f2937;
    border-radius: 18px;
    padding: 56px;
    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.45);
    display: none;
    flex-direction: column;
    overflow-y: auto;
    animation: rise 0.4s ease;
}

.slide.active { display: flex; }

@keyframes rise {
    from { opacity: 0; transform: translateY(24px); }
    to   { opacity: 1; transform: translateY(0); }
}

.slide h1 {
    color: var(--accent);
    font-size: 2.6rem;
    border-bottom: 3px solid rgba(0, 0, 0, 0.08);
    padding-bottom: 18px;
    margin-bottom: 24px;
}

.slide h2 { color: var(--accent); margin: 20px 0 12px; font-size: 1.7rem; }
.slide p  { font-size: 1.2rem; line-height: 1.7; margin-bottom: 16px; }
.slide ul { padding-left: 32px; margin-bottom: 18px; }
.slide li { font-size: 1.15rem; margin-bottom: 10px; }
.slide img { max-width: 100%; border-radius: 10px; margin: 16px 0; }
.slide hr { border: none; border-top: 2px solid rgba(0, 0, 0, 0.1); margin: 26px 0; }
.slide .code-block {
    background: #f6f6f6;
    border-left: 5px solid var(--accent);
    padding: 18px;
    font-family: 'Consolas', 'Monaco', monospace;
    white-space: pre-wrap;
    margin: 18px 0;
}

/* Annotation overlay: inert until a drawing tool is active */
#overlay {
    position: absolute;
    inset: 0;
    z-index: 50;
    pointer-events: none;
    touch-action: none;
}

body.drawing-mode #overlay {
    pointer-events: auto;
    cursor: crosshair;
}

/* Laser dot: tracked, never painted into the overlay */
.laser-dot {
    position: fixed;
    width: 14px;
    height: 14px;
    border-radius: 50%;
    background: radial-gradient(circle, #ef4444 0%, rgba(239, 68, 68, 0.35) 70%);
    border: 1px solid white;
    transform: translate(-50%, -50%);
    pointer-events: none;
    z-index: 60;
    display: none;
}

body.laser-active .laser-dot.visible { display: block; }

/* Controls */
.side-controls {
    position: fixed;
    right: 18px;
    top: 50%;
    transform: translateY(-50%);
    display: flex;
    flex-direction: column;
    gap: 10px;
    z-index: 100;
}

.ctl {
    width: 46px;
    height: 46px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.92);
    color: var(--accent);
    font-size: 17px;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
    transition: 0.15s;
}

.ctl:hover { transform: scale(1.07); }
.ctl.active { background: var(--accent); color: white; }
.ctl.small { width: 30px; height: 30px; box-shadow: none; font-size: 15px; }

.tool-group {
    display: flex;
    flex-direction: column;
    gap: 8px;
    background: rgba(0, 0, 0, 0.25);
    padding: 8px;
    border-radius: 28px;
}

/* Slide index panel */
.index-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.45);
    z-index: 150;
    opacity: 0;
    visibility: hidden;
    transition: 0.25s;
}

.index-overlay.open { opacity: 1; visibility: visible; }

.index-panel {
    position: fixed;
    top: 0;
    right: -320px;
    width: 320px;
    height: 100%;
    background: white;
    z-index: 151;
    transition: 0.25s;
    display: flex;
    flex-direction: column;
    box-shadow: -4px 0 18px rgba(0, 0, 0, 0.25);
}

.index-panel.open { right: 0; }

.index-panel header {
    padding: 16px 20px;
    background: var(--accent);
    color: white;
    font-weight: bold;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.index-panel header .ctl { color: var(--accent); }

.index-list { flex: 1; overflow-y: auto; padding: 8px; }

.index-entry {
    padding: 12px 14px;
    border-bottom: 1px solid #eee;
    cursor: pointer;
    font-size: 14px;
    color: #333;
    display: flex;
    gap: 10px;
}

.index-entry:hover { background: #f5f5f5; }
.index-entry.current { background: #eef2ff; color: var(--accent); font-weight: 600; }
.index-entry .ordinal { opacity: 0.6; min-width: 2em; }

/* Navigation bar */
.nav-bar {
    position: fixed;
    bottom: 26px;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(255, 255, 255, 0.92);
    padding: 8px 26px;
    border-radius: 40px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.25);
    display: flex;
    gap: 18px;
    align-items: center;
    z-index: 100;
}

.nav-arrow {
    background: none;
    border: none;
    font-size: 24px;
    cursor: pointer;
    color: var(--accent);
}

.page-counter { font-weight: bold; font-family: monospace; color: #333; }
"#;

/// Player script. Mirrors the `runtime` module's state machines; consumes
/// only the injected `SLIDES` and `MARKER_OP` values.
pub const PLAYER_JS: &str = r#"
const stage = document.getElementById('stage');
const overlay = document.getElementById('overlay');
const ctx = overlay.getContext('2d');
const laserDot = document.getElementById('laserDot');
const pageCounter = document.getElementById('pageCounter');

let current = 0;
let tool = null;           // 'pen' | 'marker' | 'eraser' | 'laser' | null
let strokeActive = false;
let lastX = 0, lastY = 0;

const BRUSHES = {
    pen:    { op: 'source-over',     width: 3,  alpha: 1,   color: '#ef4444',                 cap: 'round'  },
    marker: { op: MARKER_OP,         width: 20, alpha: 0.5, color: 'rgb(250, 204, 21)',       cap: 'square' },
    eraser: { op: 'destination-out', width: 40, alpha: 1,   color: '#000',                    cap: 'round'  }
};

function init() {
    SLIDES.forEach((slide, i) => {
        const el = document.createElement('section');
        el.className = 'slide' + (i === 0 ? ' active' : '');
        el.innerHTML = '<h1>' + slide.title + '</h1><div class="content">' + slide.content + '</div>';
        stage.appendChild(el);
    });
    buildIndexList();
    updateCounter();
    resizeOverlay();
    window.addEventListener('resize', resizeOverlay);
    bindEvents();
}

/* ---- navigation: circular, overlay cleared on every transition ---- */

function move(direction) {
    const slides = stage.querySelectorAll('.slide');
    slides[current].classList.remove('active');
    current = (current + direction + SLIDES.length) % SLIDES.length;
    slides[current].classList.add('active');
    afterTransition();
}

function jumpTo(index) {
    if (index < 0 || index >= SLIDES.length) return;
    const slides = stage.querySelectorAll('.slide');
    slides[current].classList.remove('active');
    current = index;
    slides[current].classList.add('active');
    afterTransition();
}

function afterTransition() {
    clearOverlay();
    strokeActive = false;
    updateCounter();
    highlightIndexEntry();
}

function updateCounter() {
    pageCounter.innerText = (current + 1) + ' / ' + SLIDES.length;
}

/* ---- tool selection: toggle, one slot, families mutually exclusive ---- */

function setTool(next) {
    tool = (tool === next) ? null : next;
    strokeActive = false;
    document.body.classList.remove('drawing-mode', 'laser-active');
    laserDot.classList.remove('visible');
    ['btnPen', 'btnMarker', 'btnEraser', 'btnLaser'].forEach(id =>
        document.getElementById(id).classList.remove('active'));

    if (!tool) return;
    const button = { pen: 'btnPen', marker: 'btnMarker', eraser: 'btnEraser', laser: 'btnLaser' }[tool];
    document.getElementById(button).classList.add('active');

    if (tool === 'laser') {
        document.body.classList.add('laser-active');
    } else {
        document.body.classList.add('drawing-mode');
        const brush = BRUSHES[tool];
        ctx.globalCompositeOperation = brush.op;
        ctx.lineWidth = brush.width;
        ctx.globalAlpha = brush.alpha;
        ctx.strokeStyle = brush.color;
        ctx.lineCap = brush.cap;
    }
}

/* ---- overlay: sized 1:1 to the viewport; resizing clears it ---- */

function resizeOverlay() {
    overlay.width = window.innerWidth;
    overlay.height = window.innerHeight;
    strokeActive = false;
    if (tool && tool !== 'laser') {
        const brush = BRUSHES[tool];
        ctx.globalCompositeOperation = brush.op;
        ctx.lineWidth = brush.width;
        ctx.globalAlpha = brush.alpha;
        ctx.strokeStyle = brush.color;
        ctx.lineCap = brush.cap;
    }
}

function clearOverlay() {
    ctx.clearRect(0, 0, overlay.width, overlay.height);
}

/* ---- pointer protocol: pointer events cover mouse and touch 1:1 ---- */

function pointerDown(e) {
    if (!tool || tool === 'laser') return;
    strokeActive = true;
    lastX = e.clientX;
    lastY = e.clientY;
}

function pointerMove(e) {
    if (tool === 'laser') {
        laserDot.style.left = e.clientX + 'px';
        laserDot.style.top = e.clientY + 'px';
        laserDot.classList.add('visible');
        return;
    }
    if (!strokeActive) return;
    ctx.beginPath();
    ctx.moveTo(lastX, lastY);
    ctx.lineTo(e.clientX, e.clientY);
    ctx.stroke();
    lastX = e.clientX;
    lastY = e.clientY;
}

function pointerUp() {
    strokeActive = false;
}

/* ---- slide index panel ---- */

function buildIndexList() {
    const list = document.getElementById('indexList');
    SLIDES.forEach((slide, i) => {
        const entry = document.createElement('div');
        entry.className = 'index-entry' + (i === 0 ? ' current' : '');
        entry.innerHTML = '<span class="ordinal">' + (i + 1) + '.</span><span>' +
            (slide.title || 'Untitled') + '</span>';
        entry.onclick = () => { jumpTo(i); closePanel(); };
        list.appendChild(entry);
    });
}

function highlightIndexEntry() {
    document.querySelectorAll('.index-entry').forEach((entry, i) =>
        entry.classList.toggle('current', i === current));
}

function togglePanel() {
    document.getElementById('indexOverlay').classList.toggle('open');
    document.getElementById('indexPanel').classList.toggle('open');
}

function closePanel() {
    document.getElementById('indexOverlay').classList.remove('open');
    document.getElementById('indexPanel').classList.remove('open');
}

function panelIsOpen() {
    return document.getElementById('indexPanel').classList.contains('open');
}

/* ---- wiring ---- */

function bindEvents() {
    overlay.addEventListener('pointerdown', pointerDown);
    document.addEventListener('pointermove', pointerMove);
    document.addEventListener('pointerup', pointerUp);
    overlay.addEventListener('pointerleave', pointerUp);

    document.getElementById('btnPrev').onclick = () => move(-1);
    document.getElementById('btnNext').onclick = () => move(1);
    document.getElementById('btnPen').onclick = () => setTool('pen');
    document.getElementById('btnMarker').onclick = () => setTool('marker');
    document.getElementById('btnEraser').onclick = () => setTool('eraser');
    document.getElementById('btnLaser').onclick = () => setTool('laser');
    document.getElementById('btnClear').onclick = clearOverlay;
    document.getElementById('btnMenu').onclick = togglePanel;
    document.getElementById('btnCloseIndex').onclick = closePanel;
    document.getElementById('indexOverlay').onclick = closePanel;
    document.getElementById('btnFull').onclick = () => {
        if (!document.fullscreenElement) {
            document.documentElement.requestFullscreen();
        } else if (document.exitFullscreen) {
            document.exitFullscreen();
        }
    };

    document.addEventListener('keydown', (e) => {
        if (e.key === 'ArrowRight' || e.key === ' ') move(1);
        if (e.key === 'ArrowLeft') move(-1);
        if (e.key === 'Escape' && panelIsOpen()) closePanel();
    });
}

init();
"#;
