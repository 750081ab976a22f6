//! CMS artifacts: a JSON-blob read/write API route, a minimal edit page,
//! and the root layout that makes the emitted tree a loadable Next.js app.

/// `app/api/cms/route.ts`: GET returns the persisted CMS blob, POST
/// overwrites it.
pub fn cms_route_ts() -> String {
    r#"import { NextResponse } from 'next/server';
import { promises as fs } from 'fs';
import path from 'path';

const DATA_FILE = path.join(process.cwd(), 'data', 'cms.json');

export async function GET() {
  try {
    const raw = await fs.readFile(DATA_FILE, 'utf-8');
    return NextResponse.json(JSON.parse(raw));
  } catch {
    return NextResponse.json({}, { status: 404 });
  }
}

export async function POST(request: Request) {
  const body = await request.json();
  await fs.mkdir(path.dirname(DATA_FILE), { recursive: true });
  await fs.writeFile(DATA_FILE, JSON.stringify(body, null, 2));
  return NextResponse.json({ ok: true });
}
"#
    .to_string()
}

/// `app/cms/page.tsx`: minimal edit page over the CMS blob.
pub fn cms_page_tsx() -> String {
    r#"'use client';

import React, { useEffect, useState } from 'react';

export default function CmsPage() {
  const [draft, setDraft] = useState('');
  const [status, setStatus] = useState('');

  useEffect(() => {
    fetch('/api/cms')
      .then((res) => res.json())
      .then((data) => setDraft(JSON.stringify(data, null, 2)))
      .catch(() => setDraft('{}'));
  }, []);

  const save = async () => {
    try {
      const body = JSON.parse(draft);
      await fetch('/api/cms', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
      });
      setStatus('Saved.');
    } catch {
      setStatus('Invalid JSON, not saved.');
    }
  };

  return (
    <div className="container mx-auto px-4 py-8">
      <h1 className="text-2xl font-bold mb-4">Site content</h1>
      <textarea
        className="w-full h-96 font-mono border rounded p-2"
        value={draft}
        onChange={(e) => setDraft(e.target.value)}
      />
      <button className="mt-4 px-4 py-2 rounded bg-primary text-white" onClick={save}>
        Save
      </button>
      <p className="mt-2 text-sm">{status}</p>
    </div>
  );
}
"#
    .to_string()
}

/// `app/layout.tsx`: root layout importing the generated stylesheet.
pub fn layout_tsx() -> String {
    r#"import './globals.css';

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#
    .to_string()
}
